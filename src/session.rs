//! Session store — the single source of truth for "who is logged in".
//!
//! ARCHITECTURE
//! ============
//! The store owns the in-memory token and identity pair and mirrors the
//! token to durable storage on every mutation, so a restart resumes in
//! `Pending` and a `check_auth` round-trip either confirms the session or
//! collapses it to `Empty`. Nothing else in the crate writes these fields.
//!
//! TRADE-OFFS
//! ==========
//! `check_auth` clones the token and touches no state until the remote call
//! settles. A dropped (cancelled) verification therefore mutates nothing,
//! and the clearing side of a failed one is indistinguishable from
//! `logout()`.

use std::sync::Arc;

use crate::net::api::{ApiError, IdentityApi};
use crate::net::types::User;
use crate::storage::{Storage, TOKEN_KEY};

/// Fallback shown when the authority rejects a login without saying why.
const GENERIC_LOGIN_FAILURE: &str = "login failed";

/// Shared handle to the session store.
///
/// The navigation guard holds the lock across a full verdict computation,
/// which is what serializes navigation intents; the login form takes the
/// same lock for the duration of a submit.
pub type SessionHandle = Arc<tokio::sync::Mutex<SessionStore>>;

/// Lifecycle state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No token.
    Empty,
    /// A durable token exists but has not been confirmed this process
    /// lifetime.
    Pending,
    /// Token and identity both present.
    Active,
}

/// Login rejection surfaced to the caller, carrying the authority's
/// human-readable message when it sent one.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct LoginError {
    pub message: String,
}

// =============================================================================
// STORE
// =============================================================================

/// Holds the current token and identity; sole mutator of both.
pub struct SessionStore {
    token: Option<String>,
    user: Option<User>,
    api: Arc<dyn IdentityApi>,
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    /// Build a store, resuming any token left in durable storage. With a
    /// stored token the session starts `Pending`; otherwise `Empty`.
    #[must_use]
    pub fn new(api: Arc<dyn IdentityApi>, storage: Arc<dyn Storage>) -> Self {
        let token = storage.get(TOKEN_KEY);
        Self { token, user: None, api, storage }
    }

    /// Wrap a fresh store in a [`SessionHandle`].
    #[must_use]
    pub fn handle(api: Arc<dyn IdentityApi>, storage: Arc<dyn Storage>) -> SessionHandle {
        Arc::new(tokio::sync::Mutex::new(Self::new(api, storage)))
    }

    /// True iff both token and identity are present.
    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Current lifecycle state, derived from the two fields.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match (&self.token, &self.user) {
            (None, _) => SessionState::Empty,
            (Some(_), None) => SessionState::Pending,
            (Some(_), Some(_)) => SessionState::Active,
        }
    }

    /// Identity of the logged-in user, if confirmed.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token and identity are stored and the token is
    /// persisted. On failure nothing changes; an already-active session
    /// stays active.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError`] with the authority's message when its error
    /// payload carried one, else a generic failure message.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<User, LoginError> {
        match self.api.login(username, password).await {
            Ok(resp) => {
                self.storage.set(TOKEN_KEY, &resp.token);
                self.token = Some(resp.token);
                self.user = Some(resp.user.clone());
                tracing::info!(username = %resp.user.username, "session established");
                Ok(resp.user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login rejected");
                let message = match e {
                    ApiError::Rejected { message: Some(message) } => message,
                    ApiError::Rejected { message: None } | ApiError::Transport(_) => {
                        GENERIC_LOGIN_FAILURE.to_owned()
                    }
                };
                Err(LoginError { message })
            }
        }
    }

    /// Clear the session and remove the durable token. Idempotent.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.storage.remove(TOKEN_KEY);
    }

    /// Confirm the current token against the authority.
    ///
    /// Without a token this reports `false` immediately, no remote call.
    /// With one, a successful round-trip stores the resolved identity; any
    /// failure (rejected token or transport fault alike) clears the
    /// session exactly as [`SessionStore::logout`] does.
    pub async fn check_auth(&mut self) -> bool {
        let Some(token) = self.token.clone() else {
            return false;
        };

        match self.api.me(&token).await {
            Ok(user) => {
                tracing::info!(username = %user.username, "session resumed");
                self.user = Some(user);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "token verification failed, clearing session");
                self.logout();
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
