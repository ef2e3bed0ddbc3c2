//! Navigation guard — one verdict per navigation intent.
//!
//! ARCHITECTURE
//! ============
//! The guard reads the configuration flag from storage and the session from
//! the shared handle, and produces exactly one [`Verdict`]. It never writes
//! storage and never touches the session fields directly; the only mutation
//! it can trigger is a `check_auth` round-trip on a pending session.
//!
//! The session lock is held for the whole verdict computation, including
//! the verification suspension point. A second intent issued while the
//! first is in flight queues on the lock (FIFO) and re-reads the settled
//! session, so two verification calls never overlap.

use std::sync::Arc;

use crate::routes::Destination;
use crate::session::{SessionHandle, SessionState};
use crate::storage::{self, Storage};

/// Decision for one navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Let the navigation commit.
    Proceed,
    /// Send the user elsewhere instead.
    Redirect(Destination),
}

impl Verdict {
    /// Path the view layer should land on: the redirect target, or the
    /// requested destination when proceeding.
    #[must_use]
    pub const fn target_path(self, requested: Destination) -> &'static str {
        match self {
            Self::Proceed => requested.path(),
            Self::Redirect(dest) => dest.path(),
        }
    }
}

/// Gatekeeper consulted before every navigation commits.
pub struct NavigationGuard {
    session: SessionHandle,
    storage: Arc<dyn Storage>,
}

impl NavigationGuard {
    #[must_use]
    pub fn new(session: SessionHandle, storage: Arc<dyn Storage>) -> Self {
        Self { session, storage }
    }

    /// Decide whether navigation to `dest` may proceed.
    ///
    /// Evaluation order: the configuration gate first (an unconfigured
    /// system serves no protected screen), then the session, resuming a
    /// pending one via `check_auth` before giving up, and finally the
    /// logged-in-revisits-onboarding redirect.
    pub async fn resolve(&self, dest: Destination) -> Verdict {
        // Serializes intents: held across the verification await.
        let mut session = self.session.lock().await;

        if dest.requires_auth() {
            if !storage::is_configured(self.storage.as_ref()) {
                tracing::debug!(dest = dest.name(), "system not configured, redirecting to setup");
                return Verdict::Redirect(Destination::Setup);
            }

            match session.state() {
                SessionState::Active => {}
                SessionState::Pending => {
                    if !session.check_auth().await {
                        tracing::debug!(dest = dest.name(), "stored token rejected, redirecting to login");
                        return Verdict::Redirect(Destination::Login);
                    }
                }
                SessionState::Empty => {
                    tracing::debug!(dest = dest.name(), "no session, redirecting to login");
                    return Verdict::Redirect(Destination::Login);
                }
            }
        }

        if matches!(dest, Destination::Setup | Destination::Login) && session.authenticated() {
            tracing::debug!(dest = dest.name(), "already logged in, redirecting home");
            return Verdict::Redirect(Destination::Dashboard);
        }

        Verdict::Proceed
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
