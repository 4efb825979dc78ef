//! Project identity and scoping types.

use serde::{Deserialize, Serialize};

/// Project identifier as issued by the backend.
///
/// The API hands out numeric ids for projects created through the
/// dashboard and string slugs for imported ones, so both shapes must
/// round-trip through serialization unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Str(id) => write!(f, "{}", id),
        }
    }
}

impl std::str::FromStr for ProjectId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(id) => Ok(Self::Int(id)),
            Err(_) => Ok(Self::Str(s.to_string())),
        }
    }
}

impl From<i64> for ProjectId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

/// Cached reference to a project the authenticated user may act on.
///
/// This is a display-level snapshot, not the full project resource;
/// unknown fields from the backend are dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

/// Which project a request acts on.
///
/// Distinguishes "the caller didn't say" from "the caller explicitly
/// asked for no project" — the two collapse into one nullable value in
/// loosely-typed clients and produce requests scoped to the wrong
/// project.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProjectScope {
    /// Resolve against the session's current project, if any.
    #[default]
    Current,
    /// Act on this specific project, ignoring the session.
    Project(ProjectId),
    /// Force the request to carry no project, even if one is selected.
    Unscoped,
}

impl ProjectScope {
    /// Scope a request to a specific project.
    pub fn project(id: impl Into<ProjectId>) -> Self {
        Self::Project(id.into())
    }
}

impl From<ProjectId> for ProjectScope {
    fn from(id: ProjectId) -> Self {
        Self::Project(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_parses_numeric() {
        let id: ProjectId = "42".parse().unwrap();
        assert_eq!(id, ProjectId::Int(42));
    }

    #[test]
    fn test_project_id_parses_slug() {
        let id: ProjectId = "acme-site".parse().unwrap();
        assert_eq!(id, ProjectId::Str("acme-site".to_string()));
    }

    #[test]
    fn test_project_id_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&ProjectId::Int(7)).unwrap(),
            "7"
        );
        assert_eq!(
            serde_json::to_string(&ProjectId::Str("p1".to_string())).unwrap(),
            "\"p1\""
        );
    }

    #[test]
    fn test_project_ref_tolerates_extra_fields() {
        let parsed: ProjectRef = serde_json::from_str(
            r#"{"id": 1, "name": "Site A", "favicon": "a.ico", "plan": "pro"}"#,
        )
        .unwrap();
        assert_eq!(parsed.id, ProjectId::Int(1));
        assert_eq!(parsed.name, "Site A");
        assert!(parsed.url.is_none());
    }

    #[test]
    fn test_default_scope_is_current() {
        assert_eq!(ProjectScope::default(), ProjectScope::Current);
    }
}
