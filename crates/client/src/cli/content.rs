//! Content generation CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Content generation commands.
#[derive(Debug, Parser)]
pub struct ContentCommand {
    #[command(subcommand)]
    pub action: ContentAction,
}

/// Available content actions.
#[derive(Debug, Subcommand)]
pub enum ContentAction {
    /// Generate an article.
    Article {
        /// Article topic.
        topic: String,
        /// Writing tone.
        #[arg(long)]
        tone: Option<String>,
        /// Target word count.
        #[arg(long)]
        word_count: Option<u32>,
    },
    /// Generate content ideas for a topic.
    Ideas {
        /// Topic to brainstorm.
        topic: String,
    },
    /// List generated articles for the scoped project.
    List,
    /// Get a generated article by ID.
    Get {
        /// Article ID.
        id: Uuid,
    },
}
