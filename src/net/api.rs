//! Identity authority client — credential login and token resolution.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`ApiError`]: `Rejected` when the authority
//! answered with a non-success status (carrying its optional `message`
//! payload), `Transport` for everything between here and there. Callers
//! treat the two uniformly when verifying a token and only surface the
//! rejection message on login.

use async_trait::async_trait;

use super::types::{ErrorBody, LoginRequest, LoginResponse, User};

/// Default authority address when `DOCKSIDE_API_URL` is unset.
const DEFAULT_API_URL: &str = "http://127.0.0.1:9000";

// =============================================================================
// PORT
// =============================================================================

/// Remote identity authority as consumed by the session store.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// Exchange credentials for a token and the identity it names.
    ///
    /// # Errors
    ///
    /// `Rejected` when the authority refuses the credentials, `Transport`
    /// when it cannot be reached.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// Resolve the identity behind `token`.
    ///
    /// # Errors
    ///
    /// `Rejected` when the token is no longer honored, `Transport` when the
    /// authority cannot be reached.
    async fn me(&self, token: &str) -> Result<User, ApiError>;
}

/// Failure talking to the identity authority.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The authority rejected the request (bad credentials, invalid token).
    #[error("rejected by identity authority")]
    Rejected {
        /// Human-readable message from the error payload, if present.
        message: Option<String>,
    },
    /// The authority could not be reached or answered garbage.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Pull the optional human-readable `message` out of an error response body.
pub(crate) fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// Identity authority endpoint configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Load from `DOCKSIDE_API_URL`, falling back to the local default.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("DOCKSIDE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.into() }
    }
}

/// HTTP implementation of [`IdentityApi`] over the dashboard backend.
pub struct HttpIdentityApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIdentityApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { client: reqwest::Client::new(), base_url: config.base_url }
    }
}

#[async_trait]
impl IdentityApi for HttpIdentityApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let resp = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Rejected { message: rejection_message(&body) });
        }

        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Transport(format!("unexpected login response: {e}")))
    }

    async fn me(&self, token: &str) -> Result<User, ApiError> {
        let resp = self
            .client
            .get(format!("{}/auth/me", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Rejected { message: rejection_message(&body) });
        }

        resp.json::<User>()
            .await
            .map_err(|e| ApiError::Transport(format!("unexpected identity response: {e}")))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
