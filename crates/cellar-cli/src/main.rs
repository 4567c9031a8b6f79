//! cellar - command line client for the cellar beer tracker.
//!
//! A thin wrapper over the REST API, intended for terminal use and
//! scripting against a running server.

mod api;
mod cli;
mod commands;
mod view;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use api::ApiClient;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    if let Err(err) = run(cli).await {
        view::failure(&format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = ApiClient::new(cli.resolve_api_url());

    match cli.command {
        Commands::List(args) => commands::list::run(&client, args).await,
        Commands::Show(args) => commands::show::run(&client, args).await,
        Commands::Add(args) => commands::add::run(&client, args).await,
        Commands::Update(args) => commands::update::run(&client, args).await,
        Commands::Delete(args) => commands::delete::run(&client, args).await,
        Commands::Drank(args) => commands::drank::run(&client, args).await,
        Commands::Stats(args) => commands::stats::run(&client, args).await,
        Commands::Health(args) => commands::health::run(&client, args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
