//! Add command implementation.

use anyhow::{Context, Result};
use clap::Args;

use cellar_core::BeerInput;

use crate::api::ApiClient;
use crate::view;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Beer name
    #[arg(long)]
    pub name: String,

    /// Brewery name
    #[arg(long)]
    pub brewery: String,

    /// Beer style (e.g. IPA, Stout)
    #[arg(long)]
    pub style: String,

    /// Alcohol by volume, 0 to 100
    #[arg(long)]
    pub abv: f64,

    /// Rating, 1 to 5
    #[arg(long)]
    pub rating: Option<f64>,

    /// Tasting notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Mark as already drank
    #[arg(long)]
    pub drank: bool,
}

pub async fn run(client: &ApiClient, args: AddArgs) -> Result<()> {
    let input = BeerInput {
        name: Some(args.name),
        brewery: Some(args.brewery),
        style: Some(args.style),
        abv: Some(args.abv),
        rating: args.rating.map(Some),
        notes: args.notes,
        drank: args.drank.then_some(true),
    };

    let confirmed = client
        .create_beer(&input)
        .await
        .context("Failed to create beer")?;

    view::success(
        confirmed
            .message
            .as_deref()
            .unwrap_or("Beer created successfully"),
    );
    view::beer_details(&confirmed.data);

    super::refresh_list(client).await
}
