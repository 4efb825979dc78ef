//! SEO analysis and AI generation operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use rankpilot_core::ProjectScope;
use uuid::Uuid;

use super::scope::NoBody;
use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// Request for analyzing a URL.
#[derive(Debug, Serialize)]
pub struct AnalyzeUrlRequest {
    pub url: String,
}

/// Severity of a reported SEO issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Info,
    Warning,
    Critical,
}

/// A single finding inside an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoIssue {
    pub severity: IssueSeverity,
    pub message: String,
}

/// One completed page analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoAnalysis {
    pub id: Uuid,
    pub url: String,
    pub score: f64,
    pub issues: Vec<SeoIssue>,
    pub created_at: DateTime<Utc>,
}

/// Generated meta tags for a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// One keyword suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSuggestion {
    pub keyword: String,
    pub volume: u64,
    pub difficulty: f64,
}

#[derive(Debug, Serialize)]
struct TopicRequest {
    topic: String,
}

impl RankpilotClient {
    /// Submit a URL for analysis, attributed to the scoped project
    /// when one resolves.
    pub async fn analyze_url(
        &self,
        url: &str,
        scope: ProjectScope,
    ) -> Result<ApiResponse<SeoAnalysis>> {
        let body = self.scoped(
            AnalyzeUrlRequest {
                url: url.to_string(),
            },
            scope,
        );
        let response = self.post("/api/v1/seo/analyze").json(&body).send().await?;
        self.handle_response(response).await
    }

    /// List analyses for the scoped project. Requires a project.
    pub async fn list_analyses(
        &self,
        scope: ProjectScope,
    ) -> Result<ApiResponse<Vec<SeoAnalysis>>> {
        let query = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .get("/api/v1/seo/analyses")
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get an analysis by its own id; no context injection.
    pub async fn get_analysis(&self, id: Uuid) -> Result<ApiResponse<SeoAnalysis>> {
        let response = self
            .get(&format!("/api/v1/seo/analyses/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Generate meta tags for a URL.
    pub async fn generate_meta_tags(
        &self,
        url: &str,
        scope: ProjectScope,
    ) -> Result<ApiResponse<MetaTags>> {
        let body = self.scoped(
            AnalyzeUrlRequest {
                url: url.to_string(),
            },
            scope,
        );
        let response = self
            .post("/api/v1/seo/meta-tags")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Generate keyword suggestions for a topic.
    pub async fn generate_keywords(
        &self,
        topic: &str,
        scope: ProjectScope,
    ) -> Result<ApiResponse<Vec<KeywordSuggestion>>> {
        let body = self.scoped(
            TopicRequest {
                topic: topic.to_string(),
            },
            scope,
        );
        let response = self.post("/api/v1/seo/keywords").json(&body).send().await?;
        self.handle_response(response).await
    }
}
