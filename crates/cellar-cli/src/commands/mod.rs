//! Subcommand implementations.

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::view;

pub mod add;
pub mod delete;
pub mod drank;
pub mod health;
pub mod list;
pub mod show;
pub mod stats;
pub mod update;

/// Re-fetch and render the full list after a mutation, replacing any
/// stale view of the collection wholesale.
pub(crate) async fn refresh_list(client: &ApiClient) -> Result<()> {
    let beers = client
        .list_beers()
        .await
        .context("Failed to refresh the list")?;

    println!();
    view::beer_table(&beers);

    Ok(())
}
