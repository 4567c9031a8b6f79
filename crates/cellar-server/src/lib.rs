//! cellar-server - REST API for the cellar beer tracker.
//!
//! Thin HTTP plumbing over `cellar-core` and `cellar-file`: routes
//! dispatch to handlers, handlers validate and translate between the
//! wire envelope and the store, the store owns the records.

use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use config::Config;
use state::AppState;

/// Initialize logging, bind and serve until ctrl-c or SIGTERM.
pub async fn start_server() -> std::io::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let state = AppState::new(config);

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let app = routes::router(state);
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
