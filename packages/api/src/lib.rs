//! # API crate — HTTP client for the EcoVision authentication API
//!
//! [`HttpAuthEndpoints`] implements [`session::AuthEndpoints`] with `reqwest`,
//! so the same session store runs against the real API in the browser and
//! against a local server in tests.
//!
//! | Call | Request | Success |
//! |------|---------|---------|
//! | `google` | `POST /api/auth/google {"token": ...}` | `{"token": ...}` |
//! | `reset_password` | `POST /api/auth/reset-password {"email": ...}` | any 2xx |
//! | `update_profile` | `PUT /api/auth/profile` with `Authorization: Bearer` | user JSON |
//!
//! Non-2xx answers become [`EndpointError::Status`], connection failures
//! [`EndpointError::Transport`], unreadable bodies [`EndpointError::Decode`].
//! `record_login` keeps the trait's no-op default: the API has no such route.

use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use session::{AuthEndpoints, EndpointError, ProfileUpdate, SessionConfig, User};

mod config;
pub use config::ApiConfig;

pub const GOOGLE_PATH: &str = "/api/auth/google";
pub const RESET_PASSWORD_PATH: &str = "/api/auth/reset-password";
pub const PROFILE_PATH: &str = "/api/auth/profile";

#[derive(Serialize)]
struct TokenBody<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

/// `reqwest`-backed authentication collaborator.
#[derive(Clone, Debug)]
pub struct HttpAuthEndpoints {
    client: Client,
    base_url: String,
}

impl HttpAuthEndpoints {
    /// `base_url` is prefixed to every endpoint path, e.g.
    /// `https://api.example.com`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(request: RequestBuilder) -> Result<Response, EndpointError> {
        let response = request
            .send()
            .await
            .map_err(|e| EndpointError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %response.url(), "endpoint rejected request");
            return Err(EndpointError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

impl AuthEndpoints for HttpAuthEndpoints {
    async fn google(&self, credential: &str) -> Result<String, EndpointError> {
        let request = self
            .client
            .post(self.url(GOOGLE_PATH))
            .json(&TokenBody { token: credential });

        let body: TokenResponse = Self::send(request)
            .await?
            .json()
            .await
            .map_err(|e| EndpointError::Decode(e.to_string()))?;
        Ok(body.token)
    }

    async fn reset_password(&self, email: &str) -> Result<(), EndpointError> {
        let request = self
            .client
            .post(self.url(RESET_PASSWORD_PATH))
            .json(&EmailBody { email });

        Self::send(request).await?;
        Ok(())
    }

    async fn update_profile(
        &self,
        bearer: &str,
        update: &ProfileUpdate,
    ) -> Result<User, EndpointError> {
        let request = self
            .client
            .put(self.url(PROFILE_PATH))
            .bearer_auth(bearer)
            .json(update);

        Self::send(request)
            .await?
            .json()
            .await
            .map_err(|e| EndpointError::Decode(e.to_string()))
    }
}
