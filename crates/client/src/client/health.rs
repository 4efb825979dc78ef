//! Health check operations.

use serde::{Deserialize, Serialize};

use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// Backend health status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl RankpilotClient {
    /// Check backend liveness.
    pub async fn health(&self) -> Result<ApiResponse<Health>> {
        let response = self.get("/api/v1/health").send().await?;
        self.handle_response(response).await
    }
}
