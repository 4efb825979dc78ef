//! Backlink program operations: strategy, planning, monitoring,
//! outreach, and scheduling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use rankpilot_core::ProjectScope;
use uuid::Uuid;

use super::scope::NoBody;
use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// Long-term backlink strategy for a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacklinkStrategy {
    pub focus: String,
    pub recommended_targets: Vec<String>,
    pub monthly_goal: u32,
}

/// Short actionable plan generated on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickPlan {
    pub steps: Vec<String>,
}

/// Periodic monitoring snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringReport {
    pub total_backlinks: u64,
    pub new_this_month: u64,
    pub lost_this_month: u64,
    pub toxic: u64,
}

/// One outreach campaign toward a link target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachCampaign {
    pub id: Uuid,
    pub target_url: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    pub status: String,
}

/// Request for creating an outreach campaign.
#[derive(Debug, Serialize)]
pub struct CreateOutreachRequest {
    pub target_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Recurring schedule of the backlink program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub cadence: String,
    #[serde(default)]
    pub next_run: Option<DateTime<Utc>>,
}

/// Request for updating the schedule.
#[derive(Debug, Serialize)]
pub struct UpdateScheduleRequest {
    pub cadence: String,
}

impl RankpilotClient {
    /// Get the backlink strategy for the scoped project. Requires a
    /// project.
    pub async fn backlink_strategy(
        &self,
        scope: ProjectScope,
    ) -> Result<ApiResponse<BacklinkStrategy>> {
        let query = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .get("/api/v1/backlinks/strategy")
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Generate a quick plan, attributed to the scoped project when
    /// one resolves.
    pub async fn backlink_quick_plan(
        &self,
        scope: ProjectScope,
    ) -> Result<ApiResponse<QuickPlan>> {
        let body = self.scoped(NoBody::default(), scope);
        let response = self
            .post("/api/v1/backlinks/quick-plan")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Monitoring report for the scoped project. Requires a project.
    pub async fn backlink_monitoring(
        &self,
        scope: ProjectScope,
    ) -> Result<ApiResponse<MonitoringReport>> {
        let query = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .get("/api/v1/backlinks/monitoring")
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create an outreach campaign under the scoped project. Requires
    /// a project.
    pub async fn create_outreach(
        &self,
        req: CreateOutreachRequest,
        scope: ProjectScope,
    ) -> Result<ApiResponse<OutreachCampaign>> {
        let body = self.scoped_required(req, scope)?;
        let response = self
            .post("/api/v1/backlinks/outreach")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List outreach campaigns for the scoped project. Requires a
    /// project.
    pub async fn list_outreach(
        &self,
        scope: ProjectScope,
    ) -> Result<ApiResponse<Vec<OutreachCampaign>>> {
        let query = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .get("/api/v1/backlinks/outreach")
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get the program schedule for the scoped project. Requires a
    /// project.
    pub async fn backlink_schedule(&self, scope: ProjectScope) -> Result<ApiResponse<Schedule>> {
        let query = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .get("/api/v1/backlinks/schedule")
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update the program schedule for the scoped project. Requires a
    /// project.
    pub async fn update_backlink_schedule(
        &self,
        req: UpdateScheduleRequest,
        scope: ProjectScope,
    ) -> Result<ApiResponse<Schedule>> {
        let body = self.scoped_required(req, scope)?;
        let response = self
            .put("/api/v1/backlinks/schedule")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
