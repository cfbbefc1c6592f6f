use std::sync::Arc;
use tracing::{info, instrument};

use crate::client::{Anonymous, ApiClient};
use crate::errors::ClientError;
use crate::forms::{check, LoginForm};
use crate::models::LoginResponse;

const LOGIN_PATH: &str = "api/auth/login";

/// Exchanges credentials for a bearer token. Keeping the token is the caller's job.
#[derive(Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Signs in; the request is sent without any stored token.
    #[instrument(skip(self), fields(email = %form.email))]
    pub async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ClientError> {
        check(form)?;
        let anonymous = self.client.with_tokens(Arc::new(Anonymous));
        let login: LoginResponse = anonymous.post(LOGIN_PATH, form).await?;
        info!(role = %login.role, "signed in");
        Ok(login)
    }
}
