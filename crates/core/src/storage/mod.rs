//! Persistent key-value storage behind the session store.
//!
//! Provides `StorageBackend` implementations for:
//! - In-memory (tests and ephemeral sessions)
//! - JSON file on disk (CLI sessions that survive the process)

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Synchronous string key-value persistence.
///
/// The surface is deliberately infallible: backends swallow their own
/// I/O and parse failures, log them, and present missing data as
/// absent. Session handling treats a broken store the same as an empty
/// one rather than failing requests over it.
pub trait StorageBackend: Send + Sync + std::fmt::Debug {
    /// Read a value, `None` if the key is absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&self, key: &str, value: &str);

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}
