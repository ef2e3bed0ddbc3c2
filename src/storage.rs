//! Durable key-value storage port.
//!
//! DESIGN
//! ======
//! The gate persists exactly two slots: the auth token and the
//! configuration-complete flag. Both sit behind the [`Storage`] trait so the
//! session store and the navigation guard never care whether the backing is
//! a JSON file, browser storage, or an in-memory map in tests.
//!
//! TRADE-OFFS
//! ==========
//! The port surface is infallible: a backend that cannot read or write logs
//! a warning and degrades to in-memory behavior. `logout()` keeps its
//! no-failure-mode contract that way, at the cost of silently losing
//! persistence when the disk is gone.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Slot holding the persisted auth token.
pub const TOKEN_KEY: &str = "dockside-token";

/// Slot holding the configuration-complete flag.
pub const CONFIGURED_KEY: &str = "dockside-configured";

/// Durable key-value storage with get/set/remove semantics.
///
/// No transactional coupling between slots is required; each key is
/// independently durable.
pub trait Storage: Send + Sync {
    /// Read a slot. `None` if the slot was never written or was removed.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a slot, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove a slot. Removing an absent slot is a no-op.
    fn remove(&self, key: &str);
}

/// True once the first-run setup flow has completed.
///
/// The flag holds exactly what [`mark_configured`] writes, so the
/// comparison is strict. Once set, nothing in the gate reverts it.
#[must_use]
pub fn is_configured(storage: &dyn Storage) -> bool {
    storage.get(CONFIGURED_KEY).as_deref() == Some("true")
}

/// Record that first-run setup has completed. Called by the setup flow once.
pub fn mark_configured(storage: &dyn Storage) {
    storage.set(CONFIGURED_KEY, "true");
}

// =============================================================================
// MEMORY BACKEND
// =============================================================================

/// In-memory storage backend. Ephemeral; used by tests and previews.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner).insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner).remove(key);
    }
}

// =============================================================================
// FILE BACKEND
// =============================================================================

/// JSON-file-backed storage. The whole map is read once at open and
/// written through on every mutation.
pub struct FileStorage {
    path: PathBuf,
    slots: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or create-on-first-write) the storage file at `path`.
    ///
    /// A missing file starts empty. An unreadable or unparsable file also
    /// starts empty, with a warning.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = load_slots(&path);
        Self { path, slots: Mutex::new(slots) }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, slots: &HashMap<String, String>) {
        let json = match serde_json::to_string_pretty(slots) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize storage state");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            tracing::warn!(error = %e, path = %self.path.display(), "failed to write storage state");
        }
    }
}

fn load_slots(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "failed to read storage state");
            return HashMap::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(slots) => slots,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "ignoring corrupt storage state");
            HashMap::new()
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut slots = self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        slots.insert(key.to_owned(), value.to_owned());
        self.flush(&slots);
    }

    fn remove(&self, key: &str) {
        let mut slots = self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if slots.remove(key).is_some() {
            self.flush(&slots);
        }
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
