//! Backlink program CLI commands.

use clap::{Parser, Subcommand};

/// Backlink program commands.
#[derive(Debug, Parser)]
pub struct BacklinksCommand {
    #[command(subcommand)]
    pub action: BacklinksAction,
}

/// Available backlink actions.
#[derive(Debug, Subcommand)]
pub enum BacklinksAction {
    /// Show the program strategy.
    Strategy,
    /// Generate a quick plan.
    QuickPlan,
    /// Show the monitoring report.
    Monitoring,
    /// List outreach campaigns.
    Outreach,
    /// Create an outreach campaign.
    OutreachCreate {
        /// Target site URL.
        #[arg(long)]
        target_url: String,
        /// Contact email, if known.
        #[arg(long)]
        contact_email: Option<String>,
    },
    /// Show the program schedule.
    Schedule,
    /// Update the program schedule cadence.
    ScheduleSet {
        /// Cadence, e.g. "weekly".
        cadence: String,
    },
}
