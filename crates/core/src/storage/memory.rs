//! In-memory storage backend for testing and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::StorageBackend;

/// In-memory storage backend.
///
/// Entries live in a `HashMap` behind an `Arc<RwLock<_>>`, so clones
/// share state. Nothing is persisted; data is lost when the last clone
/// is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let storage = MemoryStorage::new();
        storage.set("token", "abc");
        assert_eq!(storage.get("token"), Some("abc".to_string()));
    }

    #[test]
    fn test_get_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing"), None);
    }

    #[test]
    fn test_remove() {
        let storage = MemoryStorage::new();
        storage.set("token", "abc");
        storage.remove("token");
        assert_eq!(storage.get("token"), None);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove("missing");
    }

    #[test]
    fn test_clone_shares_state() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();
        storage.set("token", "abc");
        assert_eq!(clone.get("token"), Some("abc".to_string()));
    }
}
