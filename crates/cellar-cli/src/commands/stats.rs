//! Stats command implementation.

use anyhow::{Context, Result};
use clap::Args;

use cellar_core::compute_stats;

use crate::api::ApiClient;
use crate::view;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Reduce a fetched snapshot locally instead of asking the server
    #[arg(long)]
    pub local: bool,

    /// Print raw JSON instead of field lines
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &ApiClient, args: StatsArgs) -> Result<()> {
    let stats = if args.local {
        let beers = client.list_beers().await.context("Failed to list beers")?;
        compute_stats(&beers)
    } else {
        client.stats().await.context("Failed to fetch statistics")?
    };

    if args.json {
        return view::json_pretty(&stats);
    }

    view::stats_summary(&stats);

    Ok(())
}
