//! Delete command implementation.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use crate::api::ApiClient;
use crate::view;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Beer id (24 hex characters)
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub async fn run(client: &ApiClient, args: DeleteArgs) -> Result<()> {
    if !args.yes {
        let beer = client
            .get_beer(&args.id)
            .await
            .context("Failed to fetch beer")?;

        if !confirm(&format!("Delete '{}'? [y/N] ", beer.name))? {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let message = client
        .delete_beer(&args.id)
        .await
        .context("Failed to delete beer")?;

    view::success(&message);

    super::refresh_list(client).await
}

/// Prompt on stderr and read one line; anything but y/yes declines.
fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{prompt}");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
