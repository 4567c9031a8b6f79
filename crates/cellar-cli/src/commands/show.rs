//! Show command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::api::ApiClient;
use crate::view;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Beer id (24 hex characters)
    pub id: String,

    /// Print raw JSON instead of field lines
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &ApiClient, args: ShowArgs) -> Result<()> {
    let beer = client
        .get_beer(&args.id)
        .await
        .context("Failed to fetch beer")?;

    if args.json {
        return view::json_pretty(&beer);
    }

    view::beer_details(&beer);

    Ok(())
}
