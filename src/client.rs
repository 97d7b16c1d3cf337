use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{UserProfile, UserProfileCreate, UserProfileUpdate};

/// Bearer token returned by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

/// Typed client for the user-management service.
///
/// Holds an optional bearer token; [`login`](ProfileClient::login) stores the
/// token it receives, after which every call sends it.
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ProfileClient {
    pub fn new(config: &ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: config.base_url.clone(),
            token: None,
        }
    }

    pub fn with_token(config: &ClientConfig, token: impl Into<String>) -> Self {
        let mut client = Self::new(config);
        client.token = Some(token.into());
        client
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        resp.json::<T>().await.map_err(ApiError::from)
    }

    /// Exchange credentials for a bearer token (OAuth2 password flow) and
    /// store it for subsequent calls.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<AccessToken, ApiError> {
        tracing::debug!("Logging in as {email}");

        let resp = self
            .http
            .post(self.url("/api/v1/login/access-token"))
            .form(&[("username", email), ("password", password)])
            .send()
            .await?;

        let token: AccessToken = Self::decode(resp).await?;
        self.token = Some(token.access_token.clone());
        Ok(token)
    }

    /// Fetch the profile the current token belongs to.
    pub async fn read_me(&self) -> Result<UserProfile, ApiError> {
        let resp = self
            .authed(self.http.get(self.url("/api/v1/users/me")))
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Update the current user's own profile. Fields left `None` stay
    /// unchanged.
    pub async fn update_me(&self, update: &UserProfileUpdate) -> Result<UserProfile, ApiError> {
        let resp = self
            .authed(self.http.put(self.url("/api/v1/users/me")))
            .json(update)
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn list_users(&self, skip: u32, limit: u32) -> Result<Vec<UserProfile>, ApiError> {
        let resp = self
            .authed(self.http.get(self.url("/api/v1/users")))
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Create a new profile; the service assigns the id and defaults any
    /// absent fields.
    pub async fn create_user(&self, create: &UserProfileCreate) -> Result<UserProfile, ApiError> {
        tracing::debug!("Creating user {}", create.email);

        let resp = self
            .authed(self.http.post(self.url("/api/v1/users")))
            .json(create)
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn read_user(&self, id: i64) -> Result<UserProfile, ApiError> {
        let resp = self
            .authed(self.http.get(self.url(&format!("/api/v1/users/{id}"))))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn update_user(
        &self,
        id: i64,
        update: &UserProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        let resp = self
            .authed(self.http.put(self.url(&format!("/api/v1/users/{id}"))))
            .json(update)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Delete a profile, returning the deleted record.
    pub async fn delete_user(&self, id: i64) -> Result<UserProfile, ApiError> {
        let resp = self
            .authed(self.http.delete(self.url(&format!("/api/v1/users/{id}"))))
            .send()
            .await?;
        Self::decode(resp).await
    }
}
