//! rankpilot_core - session and project-context model for the rankpilot API client.
//!
//! Holds the pieces every request goes through: the [`ProjectScope`]
//! tri-state used to resolve which project a call acts on, the
//! [`SessionStore`] that persists the auth token and project context,
//! and the [`StorageBackend`] trait it persists through.

pub mod project;
pub mod session;
pub mod storage;

pub use project::{ProjectId, ProjectRef, ProjectScope};
pub use session::SessionStore;
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
