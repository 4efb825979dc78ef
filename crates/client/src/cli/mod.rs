//! CLI command definitions.

pub mod auth;
pub mod backlinks;
pub mod content;
pub mod health;
pub mod projects;
pub mod seo;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rankpilot_core::{ProjectId, ProjectScope};

/// CLI console for the RankPilot API.
#[derive(Debug, Parser)]
#[command(name = "rankpilot")]
#[command(about = "CLI console for the RankPilot API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "RANKPILOT_API_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Session file path.
    #[arg(long, env = "RANKPILOT_SESSION", default_value = ".rankpilot-session.json")]
    pub session: PathBuf,

    /// Act on this project instead of the session's current one.
    #[arg(long, global = true, value_parser = <ProjectId as std::str::FromStr>::from_str)]
    pub project: Option<ProjectId>,

    /// Force requests to carry no project context.
    #[arg(long, global = true, conflicts_with = "project")]
    pub no_project: bool,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Project scope derived from the global flags.
    pub fn scope(&self) -> ProjectScope {
        if self.no_project {
            ProjectScope::Unscoped
        } else {
            match &self.project {
                Some(id) => ProjectScope::Project(id.clone()),
                None => ProjectScope::Current,
            }
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Login, logout, and identity.
    Auth(auth::AuthCommand),
    /// Project management and dashboard.
    Projects(projects::ProjectsCommand),
    /// SEO analysis and generation.
    Seo(seo::SeoCommand),
    /// Backlink program.
    Backlinks(backlinks::BacklinksCommand),
    /// Content generation.
    Content(content::ContentCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_defaults_to_current() {
        let cli = Cli::parse_from(["rankpilot", "health", "check"]);
        assert_eq!(cli.scope(), ProjectScope::Current);
    }

    #[test]
    fn test_project_flag_sets_explicit_scope() {
        let cli = Cli::parse_from(["rankpilot", "--project", "42", "health", "check"]);
        assert_eq!(cli.scope(), ProjectScope::Project(ProjectId::Int(42)));
    }

    #[test]
    fn test_no_project_flag_forces_unscoped() {
        let cli = Cli::parse_from(["rankpilot", "--no-project", "health", "check"]);
        assert_eq!(cli.scope(), ProjectScope::Unscoped);
    }
}
