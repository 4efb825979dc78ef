//! Competitive analysis operations.
//!
//! Competitor URLs are configured per project; a comparison run diffs
//! the project's site against all of them at once.

use serde::{Deserialize, Serialize};
use rankpilot_core::ProjectScope;
use uuid::Uuid;

use super::scope::NoBody;
use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// A configured competitor URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    pub id: Uuid,
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request for adding a competitor.
#[derive(Debug, Serialize)]
pub struct AddCompetitorRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Per-competitor comparison outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorResult {
    pub url: String,
    pub score: f64,
    pub gap_keywords: Vec<String>,
}

/// A comparison run across all configured competitors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub id: Uuid,
    pub status: String,
    pub results: Vec<CompetitorResult>,
}

impl RankpilotClient {
    /// List competitors configured for the scoped project. Requires a
    /// project.
    pub async fn list_competitors(
        &self,
        scope: ProjectScope,
    ) -> Result<ApiResponse<Vec<Competitor>>> {
        let query = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .get("/api/v1/competitive/competitors")
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Add a competitor to the scoped project. Requires a project.
    pub async fn add_competitor(
        &self,
        req: AddCompetitorRequest,
        scope: ProjectScope,
    ) -> Result<ApiResponse<Competitor>> {
        let body = self.scoped_required(req, scope)?;
        let response = self
            .post("/api/v1/competitive/competitors")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Remove a competitor by its own id; no context injection.
    pub async fn remove_competitor(&self, id: Uuid) -> Result<ApiResponse<()>> {
        let response = self
            .delete(&format!("/api/v1/competitive/competitors/{}", id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    /// Run a comparison against every configured competitor. Requires
    /// a project.
    pub async fn run_comparison(&self, scope: ProjectScope) -> Result<ApiResponse<Comparison>> {
        let body = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .post("/api/v1/competitive/compare")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get a comparison run by its own id; no context injection.
    pub async fn get_comparison(&self, id: Uuid) -> Result<ApiResponse<Comparison>> {
        let response = self
            .get(&format!("/api/v1/competitive/comparisons/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
