//! Social media posting, scheduling, and profile analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use rankpilot_core::ProjectScope;
use uuid::Uuid;

use super::scope::NoBody;
use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// Request for creating a post.
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub platform: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// Request for scheduling a post.
#[derive(Debug, Serialize)]
pub struct SchedulePostRequest {
    pub platform: String,
    pub body: String,
    pub scheduled_for: DateTime<Utc>,
}

/// A created or scheduled post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: Uuid,
    pub platform: String,
    pub body: String,
    pub status: String,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// Analysis of a social profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub handle: String,
    pub platform: String,
    pub followers: u64,
    pub engagement_rate: f64,
}

#[derive(Debug, Serialize)]
struct AnalyzeProfileRequest {
    handle: String,
    platform: String,
}

impl RankpilotClient {
    /// Publish a post, attributed to the scoped project when one
    /// resolves.
    pub async fn create_post(
        &self,
        req: CreatePostRequest,
        scope: ProjectScope,
    ) -> Result<ApiResponse<SocialPost>> {
        let body = self.scoped(req, scope);
        let response = self.post("/api/v1/social/posts").json(&body).send().await?;
        self.handle_response(response).await
    }

    /// Schedule a post for later, attributed to the scoped project
    /// when one resolves.
    pub async fn schedule_post(
        &self,
        req: SchedulePostRequest,
        scope: ProjectScope,
    ) -> Result<ApiResponse<SocialPost>> {
        let body = self.scoped(req, scope);
        let response = self
            .post("/api/v1/social/schedule")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List scheduled posts for the scoped project. Requires a
    /// project.
    pub async fn list_scheduled_posts(
        &self,
        scope: ProjectScope,
    ) -> Result<ApiResponse<Vec<SocialPost>>> {
        let query = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .get("/api/v1/social/schedule")
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Cancel a scheduled post by its own id; no context injection.
    pub async fn delete_scheduled_post(&self, id: Uuid) -> Result<ApiResponse<()>> {
        let response = self
            .delete(&format!("/api/v1/social/schedule/{}", id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    /// Analyze a social profile, attributed to the scoped project when
    /// one resolves.
    pub async fn analyze_social_profile(
        &self,
        handle: &str,
        platform: &str,
        scope: ProjectScope,
    ) -> Result<ApiResponse<ProfileAnalysis>> {
        let body = self.scoped(
            AnalyzeProfileRequest {
                handle: handle.to_string(),
                platform: platform.to_string(),
            },
            scope,
        );
        let response = self
            .post("/api/v1/social/analyze")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
