//! Drank toggle command implementation.

use anyhow::{Context, Result};
use clap::Args;

use cellar_core::BeerInput;

use crate::api::ApiClient;
use crate::view;

#[derive(Args, Debug)]
pub struct DrankArgs {
    /// Beer id (24 hex characters)
    pub id: String,
}

pub async fn run(client: &ApiClient, args: DrankArgs) -> Result<()> {
    let beer = client
        .get_beer(&args.id)
        .await
        .context("Failed to fetch beer")?;

    let input = BeerInput {
        drank: Some(!beer.drank),
        ..BeerInput::default()
    };

    let confirmed = client
        .update_beer(&args.id, &input)
        .await
        .context("Failed to update beer")?;

    if confirmed.data.drank {
        view::success(&format!("Marked '{}' as drank", confirmed.data.name));
    } else {
        view::success(&format!("Marked '{}' as pending", confirmed.data.name));
    }

    super::refresh_list(client).await
}
