//! HTTP server startup.

use crate::config::ServerConfig;
use crate::http::router;
use crate::store::GameStore;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Binds the configured address and serves the REST API until Ctrl+C.
///
/// Only a failure to bind or accept ends this with an error; rejected
/// requests are answered and logged.
#[instrument(skip(store), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: &ServerConfig, store: GameStore) -> std::io::Result<()> {
    let listener = TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(addr = %listener.local_addr()?, "Server ready");

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => warn!(error = %e, "Could not listen for Ctrl+C"),
    }
}
