//! File-backed storage for sessions that outlive the process.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::warn;

use super::StorageBackend;

/// Storage backend persisted as a single JSON object on disk.
///
/// The file is read once at construction and rewritten on every
/// mutation. A missing, unreadable, or malformed file starts the
/// backend empty; write failures are logged and the in-memory copy
/// stays authoritative for the rest of the process.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl FileStorage {
    /// Opens (or initializes) the storage file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read session file, starting empty");
                return HashMap::new();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "malformed session file, starting empty");
                HashMap::new()
            }
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        let serialized = match serde_json::to_string_pretty(entries) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, "failed to serialize session data");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(err) = std::fs::create_dir_all(parent) {
                    warn!(path = %parent.display(), error = %err, "failed to create session directory");
                    return;
                }
            }
        }
        if let Err(err) = std::fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), error = %err, "failed to write session file");
        }
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        self.persist(&entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileStorage::new(&path);
        storage.set("token", "abc");
        storage.set("current_project_id", "1");

        // A fresh instance reads what the first one wrote.
        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("token"), Some("abc".to_string()));
        assert_eq!(reopened.get("current_project_id"), Some("1".to_string()));
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("absent.json"));
        assert_eq!(storage.get("token"), None);
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("token"), None);

        // Still writable afterwards.
        storage.set("token", "abc");
        assert_eq!(storage.get("token"), Some("abc".to_string()));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileStorage::new(&path);
        storage.set("token", "abc");
        storage.remove("token");

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("token"), None);
    }
}
