//! Project CLI commands.

use clap::{Parser, Subcommand};
use rankpilot_core::ProjectId;

/// Project management commands.
#[derive(Debug, Parser)]
pub struct ProjectsCommand {
    #[command(subcommand)]
    pub action: ProjectsAction,
}

/// Available project actions.
#[derive(Debug, Subcommand)]
pub enum ProjectsAction {
    /// List all projects.
    List,
    /// Re-fetch projects and reset the session's project context.
    Refresh,
    /// Create a new project.
    Create {
        /// Project name.
        #[arg(long)]
        name: String,
        /// Site URL.
        #[arg(long)]
        url: String,
        /// Industry slug.
        #[arg(long)]
        industry: Option<String>,
    },
    /// Get project by ID.
    Get {
        /// Project ID.
        id: ProjectId,
    },
    /// Delete project by ID.
    Delete {
        /// Project ID.
        id: ProjectId,
    },
    /// Select the session's current project.
    Use {
        /// Project ID.
        id: ProjectId,
    },
    /// Show the session's current project.
    Current,
    /// Dashboard summary for the scoped project.
    Summary,
}
