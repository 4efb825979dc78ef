//! SEO CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// SEO analysis commands.
#[derive(Debug, Parser)]
pub struct SeoCommand {
    #[command(subcommand)]
    pub action: SeoAction,
}

/// Available SEO actions.
#[derive(Debug, Subcommand)]
pub enum SeoAction {
    /// Analyze a URL.
    Analyze {
        /// Page URL.
        url: String,
    },
    /// List analyses for the scoped project.
    Analyses,
    /// Get an analysis by ID.
    Get {
        /// Analysis ID.
        id: Uuid,
    },
    /// Generate meta tags for a URL.
    MetaTags {
        /// Page URL.
        url: String,
    },
    /// Generate keyword suggestions for a topic.
    Keywords {
        /// Topic to suggest keywords for.
        topic: String,
    },
}
