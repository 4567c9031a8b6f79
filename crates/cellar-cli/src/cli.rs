//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{add, delete, drank, health, list, show, stats, update};

/// Base URL used when neither the flag nor the environment supplies one.
pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";

/// Command line client for the cellar beer tracker.
#[derive(Parser, Debug)]
#[command(name = "cellar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the API (falls back to CELLAR_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Flag beats environment beats the built-in default.
    pub fn resolve_api_url(&self) -> String {
        self.api_url
            .clone()
            .or_else(|| std::env::var("CELLAR_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all beers, newest first
    List(list::ListArgs),

    /// Show a single beer
    Show(show::ShowArgs),

    /// Add a new beer
    Add(add::AddArgs),

    /// Update fields of an existing beer
    Update(update::UpdateArgs),

    /// Delete a beer
    Delete(delete::DeleteArgs),

    /// Toggle a beer between drank and pending
    Drank(drank::DrankArgs),

    /// Show the collection statistics summary
    Stats(stats::StatsArgs),

    /// Check that the server is up
    Health(health::HealthArgs),
}
