//! Client error types.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
///
/// This layer performs no recovery: transport and application failures
/// pass through to the caller, and the only cross-cutting side effect
/// is the session teardown behind [`ClientError::Unauthorized`].
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Authentication failed: {detail}")]
    Unauthorized { detail: String },

    #[error("No project selected")]
    NoProjectSelected,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
