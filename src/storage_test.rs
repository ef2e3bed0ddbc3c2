use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

/// Unique temp path per test so parallel tests never share a file.
fn temp_state_path() -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("dockside-storage-test-{}-{n}.json", std::process::id()))
}

// =============================================================================
// MemoryStorage
// =============================================================================

#[test]
fn memory_get_missing_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("nope"), None);
}

#[test]
fn memory_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    assert_eq!(storage.get("k"), Some("v".to_owned()));
}

#[test]
fn memory_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set("k", "v1");
    storage.set("k", "v2");
    assert_eq!(storage.get("k"), Some("v2".to_owned()));
}

#[test]
fn memory_remove_deletes_slot() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn memory_remove_missing_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn memory_slots_are_independent() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok");
    storage.set(CONFIGURED_KEY, "true");
    storage.remove(TOKEN_KEY);
    assert_eq!(storage.get(CONFIGURED_KEY), Some("true".to_owned()));
}

// =============================================================================
// Configuration flag
// =============================================================================

#[test]
fn fresh_storage_is_not_configured() {
    let storage = MemoryStorage::new();
    assert!(!is_configured(&storage));
}

#[test]
fn mark_configured_sets_flag() {
    let storage = MemoryStorage::new();
    mark_configured(&storage);
    assert!(is_configured(&storage));
}

#[test]
fn configured_flag_comparison_is_strict() {
    let storage = MemoryStorage::new();
    for value in ["TRUE", "1", "yes", "on", ""] {
        storage.set(CONFIGURED_KEY, value);
        assert!(!is_configured(&storage), "{value:?} should not count as configured");
    }
}

#[test]
fn mark_configured_is_idempotent() {
    let storage = MemoryStorage::new();
    mark_configured(&storage);
    mark_configured(&storage);
    assert!(is_configured(&storage));
}

// =============================================================================
// FileStorage
// =============================================================================

#[test]
fn file_open_missing_starts_empty() {
    let path = temp_state_path();
    let storage = FileStorage::open(&path);
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn file_set_survives_reopen() {
    let path = temp_state_path();
    {
        let storage = FileStorage::open(&path);
        storage.set(TOKEN_KEY, "abc123");
    }
    let reopened = FileStorage::open(&path);
    assert_eq!(reopened.get(TOKEN_KEY), Some("abc123".to_owned()));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn file_remove_survives_reopen() {
    let path = temp_state_path();
    {
        let storage = FileStorage::open(&path);
        storage.set(TOKEN_KEY, "abc123");
        storage.remove(TOKEN_KEY);
    }
    let reopened = FileStorage::open(&path);
    assert_eq!(reopened.get(TOKEN_KEY), None);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn file_keeps_unrelated_slots_on_remove() {
    let path = temp_state_path();
    {
        let storage = FileStorage::open(&path);
        storage.set(TOKEN_KEY, "abc123");
        mark_configured(&storage);
        storage.remove(TOKEN_KEY);
    }
    let reopened = FileStorage::open(&path);
    assert!(is_configured(&reopened));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn file_corrupt_content_degrades_to_empty() {
    let path = temp_state_path();
    std::fs::write(&path, "{ not json").unwrap();
    let storage = FileStorage::open(&path);
    assert_eq!(storage.get(TOKEN_KEY), None);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn file_path_accessor() {
    let path = temp_state_path();
    let storage = FileStorage::open(&path);
    assert_eq!(storage.path(), path.as_path());
}
