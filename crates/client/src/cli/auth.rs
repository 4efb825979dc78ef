//! Auth CLI commands.

use clap::{Parser, Subcommand};

/// Authentication commands.
#[derive(Debug, Parser)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Available auth actions.
#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Log in and persist the session.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long, env = "RANKPILOT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log out and clear the session.
    Logout,
    /// Show the authenticated user.
    Me,
}
