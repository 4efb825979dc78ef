//! HTTP client for the RankPilot API.

pub mod auth;
pub mod backlink_analysis;
pub mod backlinks;
pub mod competitive;
pub mod content;
pub mod health;
pub mod projects;
pub mod resources;
pub mod scope;
pub mod seo;
pub mod social;
pub mod video;

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use rankpilot_core::SessionStore;

use crate::error::{ClientError, Result};

/// Default backend for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Reaction to a rejected authentication.
///
/// The browser dashboard hard-navigates to the login page here; the
/// CLI prints a hint; tests capture the call. Injected so no consumer
/// is stuck with a page redirect it cannot opt out of.
pub trait AuthFailureHandler: Send + Sync {
    /// Called after the session has been torn down for a 401.
    fn on_auth_failure(&self);
}

/// Handler that does nothing; the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuthFailureHandler;

impl AuthFailureHandler for NoopAuthFailureHandler {
    fn on_auth_failure(&self) {}
}

/// A decoded API response.
///
/// Callers consume `data` and keep `status` for logging; error bodies
/// never reach this type, they surface as [`ClientError`].
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

/// HTTP client for the RankPilot API.
///
/// One shared instance: the reqwest client pools connections, the
/// [`SessionStore`] supplies the bearer token and current project for
/// every request. Deliberately thin — no retry, no queueing, no
/// timeout beyond transport defaults.
#[derive(Clone)]
pub struct RankpilotClient {
    client: reqwest::Client,
    base_url: String,
    store: SessionStore,
    auth_failure: Arc<dyn AuthFailureHandler>,
}

impl std::fmt::Debug for RankpilotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankpilotClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RankpilotClient {
    /// Create a new client with the given base URL and session store.
    pub fn new(base_url: impl Into<String>, store: SessionStore) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            store,
            auth_failure: Arc::new(NoopAuthFailureHandler),
        }
    }

    /// Create from environment (RANKPILOT_API_URL or local default).
    pub fn from_env(store: SessionStore) -> Self {
        let base_url = std::env::var("RANKPILOT_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, store)
    }

    /// Replace the auth-failure handler.
    pub fn with_auth_failure_handler(mut self, handler: Arc<dyn AuthFailureHandler>) -> Self {
        self.auth_failure = handler;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store backing this client.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the bearer token attached when one exists.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.store.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::GET, path)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::POST, path)
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::PUT, path)
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Decode a response, mapping error statuses to [`ClientError`].
    ///
    /// A 401 additionally tears the session down and fires the
    /// auth-failure handler; the error still reaches the caller.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>> {
        let status = response.status();
        if status.is_success() {
            let data = response.json().await?;
            return Ok(ApiResponse {
                status: status.as_u16(),
                data,
            });
        }
        Err(self.handle_error(status, response.text().await.ok()))
    }

    /// Handle responses with no body expected (deletes, logouts).
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<ApiResponse<()>> {
        let status = response.status();
        if status.is_success() {
            return Ok(ApiResponse {
                status: status.as_u16(),
                data: (),
            });
        }
        Err(self.handle_error(status, response.text().await.ok()))
    }

    fn handle_error(&self, status: StatusCode, body: Option<String>) -> ClientError {
        let detail = error_detail(body);
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("authentication rejected, clearing session");
            self.store.clear_all();
            self.auth_failure.on_auth_failure();
            return ClientError::Unauthorized { detail };
        }
        ClientError::Api {
            status: status.as_u16(),
            detail,
        }
    }
}

/// Extract the backend's `detail` message from an error body, falling
/// back to the raw body, then to a generic message.
fn error_detail(body: Option<String>) -> String {
    let Some(text) = body.filter(|t| !t.is_empty()) else {
        return "Unknown error".to_string();
    };
    serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(String::from)
        })
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_detail_field() {
        let detail = error_detail(Some(r#"{"detail": "Project not found"}"#.to_string()));
        assert_eq!(detail, "Project not found");
    }

    #[test]
    fn test_error_detail_falls_back_to_body() {
        let detail = error_detail(Some("upstream exploded".to_string()));
        assert_eq!(detail, "upstream exploded");
    }

    #[test]
    fn test_error_detail_generic_fallback() {
        assert_eq!(error_detail(None), "Unknown error");
        assert_eq!(error_detail(Some(String::new())), "Unknown error");
    }

    #[test]
    fn test_error_detail_non_string_detail_keeps_body() {
        let body = r#"{"detail": {"code": 3}}"#.to_string();
        assert_eq!(error_detail(Some(body.clone())), body);
    }
}
