use std::sync::Arc;
use tracing::{info, instrument};

use super::authorize;
use crate::client::ApiClient;
use crate::dashboard::perm;
use crate::errors::ClientError;
use crate::forms::{check, BusinessProfileForm};
use crate::models::{BusinessProfile, UserRole};

const BUSINESS_PROFILE_PATH: &str = "api/business-profile";

/// Company profile of the signed-in business manager
#[derive(Clone)]
pub struct ProfileService {
    client: Arc<ApiClient>,
    actor: Option<UserRole>,
}

impl ProfileService {
    pub fn new(client: Arc<ApiClient>, actor: Option<UserRole>) -> Self {
        Self { client, actor }
    }

    #[instrument(skip(self))]
    pub async fn business_profile(&self) -> Result<BusinessProfile, ClientError> {
        self.client.get(BUSINESS_PROFILE_PATH).await
    }

    /// Saves the fields in `form` over the stored profile.
    #[instrument(skip(self, form), fields(company = %form.company_name))]
    pub async fn update_business_profile(
        &self,
        form: &BusinessProfileForm,
    ) -> Result<BusinessProfile, ClientError> {
        authorize(self.actor, perm::PROFILE_WRITE)?;
        check(form)?;
        let profile: BusinessProfile = self.client.patch(BUSINESS_PROFILE_PATH, form).await?;
        info!("business profile updated");
        Ok(profile)
    }
}
