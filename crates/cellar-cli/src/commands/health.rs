//! Health command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::api::ApiClient;
use crate::view;

#[derive(Args, Debug)]
pub struct HealthArgs {}

pub async fn run(client: &ApiClient, _args: HealthArgs) -> Result<()> {
    let health = client
        .health()
        .await
        .context("Server is not responding")?;

    view::success("Server is up");
    view::field("Environment", &health.environment);
    view::field("Uptime", &format!("{:.0}s", health.uptime));
    view::field("Timestamp", &health.timestamp);

    Ok(())
}
