//! Persistent session and project-context store.

use std::sync::Arc;

use tracing::warn;

use crate::project::{ProjectId, ProjectRef};
use crate::storage::StorageBackend;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the selected project id.
pub const CURRENT_PROJECT_KEY: &str = "current_project_id";
/// Storage key for the cached project list.
pub const AVAILABLE_PROJECTS_KEY: &str = "available_projects";

/// Persistent store for the auth token and project context.
///
/// Wraps a [`StorageBackend`] and owns the three session keys as one
/// logical unit, so the "select first project on refresh" and "tear
/// everything down on logout" rules live in exactly one place instead
/// of being repeated at every storage call site.
///
/// Reads never fail: malformed persisted data is logged and treated as
/// empty.
#[derive(Debug, Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    /// Creates a store over the given backend.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Reads the persisted auth token.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    /// Persists the auth token.
    pub fn set_token(&self, token: &str) {
        self.backend.set(TOKEN_KEY, token);
    }

    /// Reads the cached list of projects the user may act on.
    ///
    /// Malformed persisted JSON is logged and reported as an empty
    /// list.
    pub fn available_projects(&self) -> Vec<ProjectRef> {
        let Some(raw) = self.backend.get(AVAILABLE_PROJECTS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(projects) => projects,
            Err(err) => {
                warn!(error = %err, "malformed persisted project list, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replaces the cached project list.
    ///
    /// A non-empty list also selects its first project as current; an
    /// empty list leaves the current selection untouched.
    pub fn set_available_projects(&self, projects: &[ProjectRef]) {
        match serde_json::to_string(projects) {
            Ok(serialized) => self.backend.set(AVAILABLE_PROJECTS_KEY, &serialized),
            Err(err) => {
                warn!(error = %err, "failed to serialize project list");
                return;
            }
        }
        match projects.first() {
            Some(first) => self.set_current_project(Some(first.id.clone())),
            None => warn!("project list set to empty, keeping current project selection"),
        }
    }

    /// Reads the selected project id.
    ///
    /// Raw read: the id is not validated against the available list, so
    /// a selection can dangle after the list is refreshed.
    pub fn current_project_id(&self) -> Option<ProjectId> {
        let raw = self.backend.get(CURRENT_PROJECT_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "malformed persisted project id, treating as unset");
                None
            }
        }
    }

    /// Persists the selected project id; `None` removes the selection.
    pub fn set_current_project(&self, id: Option<ProjectId>) {
        match id {
            Some(id) => match serde_json::to_string(&id) {
                Ok(serialized) => self.backend.set(CURRENT_PROJECT_KEY, &serialized),
                Err(err) => warn!(error = %err, "failed to serialize project id"),
            },
            None => self.backend.remove(CURRENT_PROJECT_KEY),
        }
    }

    /// Looks up the selected project inside the cached list.
    pub fn current_project(&self) -> Option<ProjectRef> {
        let id = self.current_project_id()?;
        self.available_projects().into_iter().find(|p| p.id == id)
    }

    /// Whether a project is currently selected.
    pub fn has_current_project(&self) -> bool {
        self.current_project_id().is_some()
    }

    /// Removes the project selection, keeping token and project list.
    pub fn clear_current_project(&self) {
        self.backend.remove(CURRENT_PROJECT_KEY);
    }

    /// Session teardown: removes token, project selection, and project
    /// list as one logical unit.
    pub fn clear_all(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(CURRENT_PROJECT_KEY);
        self.backend.remove(AVAILABLE_PROJECTS_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    fn project(id: impl Into<ProjectId>, name: &str) -> ProjectRef {
        ProjectRef {
            id: id.into(),
            name: name.to_string(),
            url: None,
            industry: None,
        }
    }

    // ==================== Token Tests ====================

    #[test]
    fn test_token_round_trip() {
        let store = store();
        assert_eq!(store.token(), None);
        store.set_token("tok-123");
        assert_eq!(store.token(), Some("tok-123".to_string()));
    }

    // ==================== Project List Tests ====================

    #[test]
    fn test_set_available_projects_selects_first() {
        let store = store();
        store.set_available_projects(&[project("x", "X"), project("y", "Y")]);
        assert_eq!(store.current_project_id(), Some(ProjectId::from("x")));
    }

    #[test]
    fn test_set_empty_projects_keeps_selection() {
        let store = store();
        store.set_current_project(Some(ProjectId::from("x")));
        store.set_available_projects(&[]);
        assert_eq!(store.current_project_id(), Some(ProjectId::from("x")));
        assert!(store.available_projects().is_empty());
    }

    #[test]
    fn test_malformed_project_list_reads_empty() {
        let backend = Arc::new(MemoryStorage::new());
        backend.set(AVAILABLE_PROJECTS_KEY, "{not json");
        let store = SessionStore::new(backend);
        assert!(store.available_projects().is_empty());
    }

    // ==================== Selection Tests ====================

    #[test]
    fn test_current_project_lookup() {
        let store = store();
        store.set_available_projects(&[project(1i64, "Site A"), project(2i64, "Site B")]);

        assert_eq!(store.current_project(), Some(project(1i64, "Site A")));

        store.set_current_project(Some(ProjectId::from(2i64)));
        assert_eq!(store.current_project(), Some(project(2i64, "Site B")));
    }

    #[test]
    fn test_dangling_selection_resolves_to_none() {
        let store = store();
        store.set_available_projects(&[project(1i64, "Site A")]);
        store.set_current_project(Some(ProjectId::from(99i64)));

        // Raw id survives, lookup does not.
        assert_eq!(store.current_project_id(), Some(ProjectId::from(99i64)));
        assert_eq!(store.current_project(), None);
    }

    #[test]
    fn test_clear_current_project() {
        let store = store();
        store.set_current_project(Some(ProjectId::from("x")));
        assert!(store.has_current_project());
        store.clear_current_project();
        assert!(!store.has_current_project());
    }

    #[test]
    fn test_set_current_project_none_removes_key() {
        let store = store();
        store.set_current_project(Some(ProjectId::from("x")));
        store.set_current_project(None);
        assert_eq!(store.current_project_id(), None);
    }

    // ==================== Teardown Tests ====================

    #[test]
    fn test_clear_all_is_atomic() {
        let store = store();
        store.set_token("tok-123");
        store.set_available_projects(&[project("x", "X")]);

        store.clear_all();

        assert_eq!(store.token(), None);
        assert_eq!(store.current_project_id(), None);
        assert!(store.available_projects().is_empty());
    }

    // ==================== Scenario Tests ====================

    #[test]
    fn test_project_switch_scenario() {
        let store = store();
        assert_eq!(store.current_project(), None);

        store.set_available_projects(&[project(1i64, "Site A"), project(2i64, "Site B")]);
        assert_eq!(store.current_project(), Some(project(1i64, "Site A")));

        store.set_current_project(Some(ProjectId::from(2i64)));
        assert_eq!(store.current_project(), Some(project(2i64, "Site B")));
    }

    #[test]
    fn test_numeric_id_survives_persistence() {
        let store = store();
        store.set_current_project(Some(ProjectId::from(42i64)));
        assert_eq!(store.current_project_id(), Some(ProjectId::Int(42)));
    }
}
