//! rankpilot_client - typed API client for the RankPilot SEO platform.
//!
//! One configured [`RankpilotClient`] carries the bearer token and the
//! implicit project context into every request; domain modules under
//! [`client`] map one method to one REST endpoint and return the
//! response untouched. On a 401 the session is torn down and the
//! injected auth-failure handler runs before the error reaches the
//! caller.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::{ApiResponse, AuthFailureHandler, NoopAuthFailureHandler, RankpilotClient};
pub use error::{ClientError, Result};
