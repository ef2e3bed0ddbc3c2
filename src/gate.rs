//! Wired-up gate context handed to the view layer.
//!
//! DESIGN
//! ======
//! `Gate` is the one struct the application shell holds: the shared session
//! handle for the login form, the guard for the router, and the storage
//! port for the setup flow. Clone is cheap — every field is Arc-backed.

use std::sync::Arc;

use crate::guard::NavigationGuard;
use crate::net::api::{ApiConfig, HttpIdentityApi, IdentityApi};
use crate::session::{SessionHandle, SessionStore};
use crate::storage::{self, FileStorage, Storage};

/// Default durable-state file when `DOCKSIDE_STATE_FILE` is unset.
const DEFAULT_STATE_FILE: &str = "dockside-state.json";

/// Everything the view layer needs to gate navigation and manage login.
#[derive(Clone)]
pub struct Gate {
    session: SessionHandle,
    guard: Arc<NavigationGuard>,
    storage: Arc<dyn Storage>,
}

impl Gate {
    /// Wire a gate from explicit ports.
    #[must_use]
    pub fn new(api: Arc<dyn IdentityApi>, storage: Arc<dyn Storage>) -> Self {
        let session = SessionStore::handle(api, Arc::clone(&storage));
        let guard = Arc::new(NavigationGuard::new(Arc::clone(&session), Arc::clone(&storage)));
        Self { session, guard, storage }
    }

    /// Wire a gate against the HTTP identity authority and file storage,
    /// both configured from the environment (`DOCKSIDE_API_URL`,
    /// `DOCKSIDE_STATE_FILE`).
    #[must_use]
    pub fn from_env() -> Self {
        let api = Arc::new(HttpIdentityApi::new(ApiConfig::from_env()));
        let state_file =
            std::env::var("DOCKSIDE_STATE_FILE").unwrap_or_else(|_| DEFAULT_STATE_FILE.into());
        let storage = Arc::new(FileStorage::open(state_file));
        Self::new(api, storage)
    }

    /// Shared session handle, for the login form and shell chrome.
    #[must_use]
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Navigation guard, for the router.
    #[must_use]
    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    /// True once first-run setup has completed.
    #[must_use]
    pub fn configured(&self) -> bool {
        storage::is_configured(self.storage.as_ref())
    }

    /// Record that first-run setup has completed. The setup flow's single
    /// integration point; there is no reverse operation.
    pub fn mark_configured(&self) {
        storage::mark_configured(self.storage.as_ref());
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
