//! Content generation operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use rankpilot_core::ProjectScope;
use uuid::Uuid;

use super::scope::NoBody;
use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// Request for generating an article.
#[derive(Debug, Serialize)]
pub struct GenerateArticleRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
}

/// A generated article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArticle {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// One content idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentIdea {
    pub title: String,
    pub angle: String,
}

#[derive(Debug, Serialize)]
struct IdeasRequest {
    topic: String,
}

impl RankpilotClient {
    /// Generate an article, attributed to the scoped project when one
    /// resolves.
    pub async fn generate_article(
        &self,
        req: GenerateArticleRequest,
        scope: ProjectScope,
    ) -> Result<ApiResponse<GeneratedArticle>> {
        let body = self.scoped(req, scope);
        let response = self
            .post("/api/v1/content/articles")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Generate content ideas for a topic.
    pub async fn generate_ideas(
        &self,
        topic: &str,
        scope: ProjectScope,
    ) -> Result<ApiResponse<Vec<ContentIdea>>> {
        let body = self.scoped(
            IdeasRequest {
                topic: topic.to_string(),
            },
            scope,
        );
        let response = self
            .post("/api/v1/content/ideas")
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List generated articles for the scoped project. Requires a
    /// project.
    pub async fn list_articles(
        &self,
        scope: ProjectScope,
    ) -> Result<ApiResponse<Vec<GeneratedArticle>>> {
        let query = self.scoped_required(NoBody::default(), scope)?;
        let response = self
            .get("/api/v1/content/articles")
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get a generated article by its own id; no context injection.
    pub async fn get_article(&self, id: Uuid) -> Result<ApiResponse<GeneratedArticle>> {
        let response = self
            .get(&format!("/api/v1/content/articles/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
