//! Authentication operations.

use serde::{Deserialize, Serialize};

use super::{ApiResponse, RankpilotClient};
use crate::error::Result;

/// Request for logging in.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

/// Authenticated user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: uuid::Uuid,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl RankpilotClient {
    /// Log in, persist the token, and seed the project context.
    ///
    /// The project refresh is best effort: a failure there leaves the
    /// session authenticated with an empty project list.
    pub async fn login(&self, email: &str, password: &str) -> Result<ApiResponse<AuthSession>> {
        let response = self
            .post("/api/v1/auth/login")
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let session: ApiResponse<AuthSession> = self.handle_response(response).await?;

        self.store().set_token(&session.data.token);
        if let Err(err) = self.refresh_projects().await {
            tracing::warn!(error = %err, "logged in but failed to fetch projects");
        }
        Ok(session)
    }

    /// Log out: notify the server (best effort) and tear the local
    /// session down. Always succeeds locally.
    pub async fn logout(&self) {
        let request = self.post("/api/v1/auth/logout").send().await;
        self.store().clear_all();
        match request {
            Ok(response) => {
                if let Err(err) = self.handle_empty_response(response).await {
                    tracing::debug!(error = %err, "server logout failed, session cleared locally");
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "server unreachable during logout, session cleared locally");
            }
        }
    }

    /// Fetch the authenticated user's profile.
    pub async fn me(&self) -> Result<ApiResponse<UserProfile>> {
        let response = self.get("/api/v1/auth/me").send().await?;
        self.handle_response(response).await
    }
}
