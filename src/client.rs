//! HTTP plumbing shared by every service.
//!
//! Authentication is handled by a pluggable [`TokenProvider`], called before
//! every request. Token storage belongs to the caller.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::errors::ClientError;

/// Source of bearer tokens. `Ok(None)` sends the request anonymously.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<Option<String>, ClientError>;
}

/// No authentication; used for sign-in.
pub struct Anonymous;

#[async_trait]
impl TokenProvider for Anonymous {
    async fn token(&self) -> Result<Option<String>, ClientError> {
        Ok(None)
    }
}

/// Bearer token obtained elsewhere.
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<Option<String>, ClientError> {
        Ok(Some(self.0.clone()))
    }
}

/// JSON client for the backend. One call makes exactly one request.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenProvider>) -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::new(base_url), tokens)
    }

    pub fn from_config(
        config: &ClientConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: normalize_base(&config.base_url)?,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Same HTTP pool and base URL, different credentials.
    pub fn with_tokens(&self, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.url(path)?;
        debug!(%method, %url, "sending request");
        let builder = self.http.request(method, url);
        Ok(match self.tokens.token().await? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::from_status(status, &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let builder = self.request(Method::GET, path).await?;
        Self::decode(self.send(builder).await?).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).await?.query(query);
        Self::decode(self.send(builder).await?).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).await?.json(body);
        Self::decode(self.send(builder).await?).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path).await?.json(body);
        Self::decode(self.send(builder).await?).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PATCH, path).await?.json(body);
        Self::decode(self.send(builder).await?).await
    }

    /// Sends a body and ignores whatever comes back (often 204).
    pub async fn send_empty<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path).await?.json(body);
        self.send(builder).await.map(drop)
    }

    /// Sends a request without a body and ignores the response body.
    pub async fn send_bare(&self, method: Method, path: &str) -> Result<(), ClientError> {
        let builder = self.request(method, path).await?;
        self.send(builder).await.map(drop)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send_bare(Method::DELETE, path).await
    }
}

fn normalize_base(raw: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Config(format!(
            "unsupported URL scheme: {}",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use mockall::mock;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    mock! {
        pub Tokens {}

        #[async_trait]
        impl TokenProvider for Tokens {
            async fn token(&self) -> Result<Option<String>, ClientError>;
        }
    }

    fn client(server: &MockServer, token: &str) -> ApiClient {
        ApiClient::new(&server.uri(), Arc::new(StaticToken::new(token))).unwrap()
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let url = normalize_base("https://api.example.com/v1").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/");
        assert_eq!(url.join("api/shipments").unwrap().path(), "/v1/api/shipments");
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert_matches!(normalize_base("ftp://example.com"), Err(ClientError::Config(_)));
    }

    #[tokio::test]
    async fn attaches_bearer_token_and_decodes_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/ping"))
            .and(header("authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let body: serde_json::Value = client(&server, "abc").get("api/ping").await.unwrap();
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn query_parameters_are_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/shipments"))
            .and(query_param("status", "InTransit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let list: Vec<serde_json::Value> = client(&server, "abc")
            .get_query("api/shipments", &[("status", "InTransit")])
            .await
            .unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn unauthorized_maps_to_session_expired() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result: Result<serde_json::Value, _> = client(&server, "stale").get("api/me").await;
        assert_matches!(result, Err(ClientError::SessionExpired));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let result: Result<serde_json::Value, _> = client(&server, "abc").get("api/x").await;
        assert_matches!(result, Err(ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn token_failure_aborts_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut tokens = MockTokens::new();
        tokens
            .expect_token()
            .times(1)
            .returning(|| Err(ClientError::SessionExpired));
        let api = ApiClient::new(&server.uri(), Arc::new(tokens)).unwrap();

        let result: Result<serde_json::Value, _> = api.get("api/x").await;
        assert_matches!(result, Err(ClientError::SessionExpired));
    }

    #[tokio::test]
    async fn anonymous_requests_carry_no_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/items/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri(), Arc::new(Anonymous)).unwrap();
        api.delete("api/items/1").await.unwrap();

        let received = server.received_requests().await.unwrap();
        assert!(received[0].headers.get("authorization").is_none());
    }
}
