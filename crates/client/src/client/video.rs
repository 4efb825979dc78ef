//! Video and 3D-character generation jobs.
//!
//! Jobs are asynchronous on the backend: submission returns a queued
//! job, callers poll it by id until it completes or fails.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use rankpilot_core::ProjectScope;
use uuid::Uuid;

use super::scope::NoBody;
use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// Request for a video generation job.
#[derive(Debug, Serialize)]
pub struct SubmitVideoJobRequest {
    pub script: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

/// Request for a 3D-character generation job.
#[derive(Debug, Serialize)]
pub struct SubmitCharacterJobRequest {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Lifecycle state of a generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

/// A submitted generation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationJob {
    pub id: Uuid,
    pub kind: String,
    pub status: JobStatus,
    #[serde(default)]
    pub result_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RankpilotClient {
    /// Submit a video generation job, attributed to the scoped project
    /// when one resolves.
    pub async fn submit_video_job(
        &self,
        req: SubmitVideoJobRequest,
        scope: ProjectScope,
    ) -> Result<ApiResponse<GenerationJob>> {
        let body = self.scoped(req, scope);
        let response = self.post("/api/v1/video/jobs").json(&body).send().await?;
        self.handle_response(response).await
    }

    /// Submit a 3D-character generation job, attributed to the scoped
    /// project when one resolves.
    pub async fn submit_character_job(
        &self,
        req: SubmitCharacterJobRequest,
        scope: ProjectScope,
    ) -> Result<ApiResponse<GenerationJob>> {
        let body = self.scoped(req, scope);
        let response = self
            .post("/api/v1/video/characters")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Poll a job by its own id; no context injection.
    pub async fn get_job_status(&self, id: Uuid) -> Result<ApiResponse<GenerationJob>> {
        let response = self
            .get(&format!("/api/v1/video/jobs/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List jobs for the scoped project. Requires a project.
    pub async fn list_jobs(&self, scope: ProjectScope) -> Result<ApiResponse<Vec<GenerationJob>>> {
        let query = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .get("/api/v1/video/jobs")
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
