//! Static catalogue lookups.
//!
//! These endpoints are global, not project data, so they deliberately
//! bypass project-context injection even when a project is selected.

use serde::{Deserialize, Serialize};

use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// One supported industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Industry {
    pub name: String,
    pub slug: String,
}

/// Curated resources for one industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryResources {
    pub industry: String,
    pub keywords: Vec<String>,
    pub directories: Vec<String>,
}

impl RankpilotClient {
    /// List supported industries.
    pub async fn list_industries(&self) -> Result<ApiResponse<Vec<Industry>>> {
        let response = self.get("/api/v1/resources/industries").send().await?;
        self.handle_response(response).await
    }

    /// Curated resources for an industry, looked up by slug.
    pub async fn industry_resources(&self, slug: &str) -> Result<ApiResponse<IndustryResources>> {
        let response = self
            .get(&format!("/api/v1/resources/industries/{}", slug))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
