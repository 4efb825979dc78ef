//! Implicit project-context injection.
//!
//! Bodies and query strings share one injection path: [`Scoped`]
//! wraps any payload and is serialized with `.json()` for POST/PUT
//! and `.query()` for GET, so the resolution rule cannot drift
//! between the two.

use serde::Serialize;
use rankpilot_core::{ProjectId, ProjectScope};

use super::RankpilotClient;
use crate::error::{ClientError, Result};

/// A payload with the resolved project id merged in.
///
/// Serialization flattens the inner payload and appends `project_id`
/// only when one resolved — an unresolved scope adds no key at all.
/// The inner payload is never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Scoped<T: Serialize> {
    #[serde(flatten)]
    inner: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<ProjectId>,
}

impl<T: Serialize> Scoped<T> {
    /// The wrapped payload.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// The project id that will be serialized, if any.
    pub fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }
}

/// Empty payload for requests whose only parameter is the project.
#[derive(Debug, Default, Clone, Serialize)]
pub struct NoBody {}

impl RankpilotClient {
    /// Resolve a scope to a concrete project id.
    ///
    /// Explicit scopes win as-is; `Current` consults the session store;
    /// `Unscoped` resolves to nothing even when a project is selected.
    /// Never writes to the store.
    pub fn resolve_project(&self, scope: ProjectScope) -> Option<ProjectId> {
        match scope {
            ProjectScope::Project(id) => Some(id),
            ProjectScope::Current => self.store().current_project_id(),
            ProjectScope::Unscoped => None,
        }
    }

    /// Merge the resolved project id (if any) into a payload.
    pub fn scoped<T: Serialize>(&self, inner: T, scope: ProjectScope) -> Scoped<T> {
        Scoped {
            project_id: self.resolve_project(scope),
            inner,
        }
    }

    /// Like [`scoped`](Self::scoped), but the endpoint requires a
    /// project: an unresolvable scope is rejected locally before any
    /// network I/O.
    pub fn scoped_required<T: Serialize>(
        &self,
        inner: T,
        scope: ProjectScope,
    ) -> Result<Scoped<T>> {
        let id = self.require_project(scope)?;
        Ok(Scoped {
            project_id: Some(id),
            inner,
        })
    }

    /// Resolve a scope or reject with [`ClientError::NoProjectSelected`].
    pub fn require_project(&self, scope: ProjectScope) -> Result<ProjectId> {
        self.resolve_project(scope)
            .ok_or(ClientError::NoProjectSelected)
    }
}
