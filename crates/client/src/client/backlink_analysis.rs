//! Backlink analysis of arbitrary URLs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use rankpilot_core::ProjectScope;

use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// Request for analyzing a URL's backlinks.
#[derive(Debug, Serialize)]
pub struct AnalyzeBacklinksRequest {
    pub url: String,
}

/// One discovered backlink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backlink {
    pub source_url: String,
    pub anchor_text: String,
    pub follow: bool,
    pub first_seen: DateTime<Utc>,
}

/// Aggregate backlink profile of a URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacklinkProfile {
    pub url: String,
    pub total: u64,
    pub referring_domains: u64,
    pub domain_authority: f64,
}

#[derive(Debug, Serialize)]
struct ProfileQuery {
    url: String,
}

impl RankpilotClient {
    /// Analyze a URL's backlinks, attributed to the scoped project
    /// when one resolves.
    pub async fn analyze_backlinks(
        &self,
        url: &str,
        scope: ProjectScope,
    ) -> Result<ApiResponse<Vec<Backlink>>> {
        let body = self.scoped(
            AnalyzeBacklinksRequest {
                url: url.to_string(),
            },
            scope,
        );
        let response = self
            .post("/api/v1/backlink-analysis/analyze")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Profile summary keyed by the URL itself; no context injection.
    pub async fn backlink_profile(&self, url: &str) -> Result<ApiResponse<BacklinkProfile>> {
        let response = self
            .get("/api/v1/backlink-analysis/profile")
            .query(&ProfileQuery {
                url: url.to_string(),
            })
            .send()
            .await?;
        self.handle_response(response).await
    }
}
