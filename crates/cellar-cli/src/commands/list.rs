//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::api::ApiClient;
use crate::view;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print raw JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &ApiClient, args: ListArgs) -> Result<()> {
    let beers = client.list_beers().await.context("Failed to list beers")?;

    if args.json {
        return view::json_pretty(&beers);
    }

    if beers.is_empty() {
        eprintln!("{}", "No beers in the cellar yet.".dimmed());
        return Ok(());
    }

    view::beer_table(&beers);

    Ok(())
}
