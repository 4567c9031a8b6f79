//! Update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use cellar_core::BeerInput;

use crate::api::ApiClient;
use crate::view;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Beer id (24 hex characters)
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New brewery
    #[arg(long)]
    pub brewery: Option<String>,

    /// New style
    #[arg(long)]
    pub style: Option<String>,

    /// New alcohol by volume
    #[arg(long)]
    pub abv: Option<f64>,

    /// New rating, 1 to 5
    #[arg(long, conflicts_with = "clear_rating")]
    pub rating: Option<f64>,

    /// Remove the rating
    #[arg(long)]
    pub clear_rating: bool,

    /// New tasting notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Set the drank flag explicitly
    #[arg(long)]
    pub drank: Option<bool>,
}

pub async fn run(client: &ApiClient, args: UpdateArgs) -> Result<()> {
    let rating = if args.clear_rating {
        Some(None)
    } else {
        args.rating.map(Some)
    };

    let input = BeerInput {
        name: args.name,
        brewery: args.brewery,
        style: args.style,
        abv: args.abv,
        rating,
        notes: args.notes,
        drank: args.drank,
    };

    if serde_json::to_value(&input)? == serde_json::json!({}) {
        bail!("Nothing to update: supply at least one field");
    }

    let confirmed = client
        .update_beer(&args.id, &input)
        .await
        .context("Failed to update beer")?;

    view::success(
        confirmed
            .message
            .as_deref()
            .unwrap_or("Beer updated successfully"),
    );
    view::beer_details(&confirmed.data);

    super::refresh_list(client).await
}
