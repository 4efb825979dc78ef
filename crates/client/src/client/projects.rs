//! Project and dashboard operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use rankpilot_core::{ProjectId, ProjectRef, ProjectScope};
use uuid::Uuid;

use super::scope::NoBody;
use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// Full project resource as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub industry: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Project> for ProjectRef {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            url: Some(project.url.clone()),
            industry: project.industry.clone(),
        }
    }
}

/// Request for creating a project.
#[derive(Debug, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

/// Request for updating a project.
#[derive(Debug, Default, Serialize)]
pub struct UpdateProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

/// A member of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMember {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

/// Request for adding a member to a project.
#[derive(Debug, Serialize)]
pub struct AddMemberRequest {
    pub email: String,
    pub role: String,
}

/// Aggregated dashboard numbers for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub project_id: ProjectId,
    pub seo_score: f64,
    pub tracked_keywords: u64,
    pub backlinks_total: u64,
    pub open_issues: u64,
}

impl RankpilotClient {
    /// List the authenticated user's projects.
    pub async fn list_projects(&self) -> Result<ApiResponse<Vec<Project>>> {
        let response = self.get("/api/v1/projects").send().await?;
        self.handle_response(response).await
    }

    /// List projects and seed the session's project context with the
    /// result. A non-empty list selects its first project as current.
    pub async fn refresh_projects(&self) -> Result<ApiResponse<Vec<Project>>> {
        let projects = self.list_projects().await?;
        let refs: Vec<ProjectRef> = projects.data.iter().map(ProjectRef::from).collect();
        self.store().set_available_projects(&refs);
        Ok(projects)
    }

    /// Create a new project.
    pub async fn create_project(&self, req: CreateProjectRequest) -> Result<ApiResponse<Project>> {
        let response = self.post("/api/v1/projects").json(&req).send().await?;
        self.handle_response(response).await
    }

    /// Get a project by its own id; no context injection.
    pub async fn get_project(&self, id: &ProjectId) -> Result<ApiResponse<Project>> {
        let response = self
            .get(&format!("/api/v1/projects/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update a project.
    pub async fn update_project(
        &self,
        id: &ProjectId,
        req: UpdateProjectRequest,
    ) -> Result<ApiResponse<Project>> {
        let response = self
            .put(&format!("/api/v1/projects/{}", id))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a project by its own id.
    pub async fn delete_project(&self, id: &ProjectId) -> Result<ApiResponse<()>> {
        let response = self
            .delete(&format!("/api/v1/projects/{}", id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    /// Dashboard summary for the scoped project. Requires a project.
    pub async fn dashboard_summary(
        &self,
        scope: ProjectScope,
    ) -> Result<ApiResponse<DashboardSummary>> {
        let query = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .get("/api/v1/dashboard/summary")
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List members of a project.
    pub async fn list_members(&self, id: &ProjectId) -> Result<ApiResponse<Vec<ProjectMember>>> {
        let response = self
            .get(&format!("/api/v1/projects/{}/members", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Add a member to a project.
    pub async fn add_member(
        &self,
        id: &ProjectId,
        req: AddMemberRequest,
    ) -> Result<ApiResponse<ProjectMember>> {
        let response = self
            .post(&format!("/api/v1/projects/{}/members", id))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Remove a member from a project.
    pub async fn remove_member(
        &self,
        id: &ProjectId,
        member_id: Uuid,
    ) -> Result<ApiResponse<()>> {
        let response = self
            .delete(&format!("/api/v1/projects/{}/members/{}", id, member_id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
