//! Noughts - unified CLI
//!
//! Play locally on the console or host games over HTTP.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::Console;
use noughts::cli::{Cli, Command};
use noughts_server::{GameStore, ServerConfig};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Console => run_console().await,
        Command::Serve { port, host, config } => run_server(host, port, config).await,
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run a local game on stdin/stdout
async fn run_console() -> Result<()> {
    init_tracing("warn");

    tokio::task::spawn_blocking(|| {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        Console::new(stdin.lock(), stdout.lock()).play()
    })
    .await
    .context("Console task failed")??;

    Ok(())
}

/// Run the HTTP game server
#[instrument(skip_all)]
async fn run_server(
    host: Option<String>,
    port: Option<u16>,
    config: Option<PathBuf>,
) -> Result<()> {
    init_tracing("info");

    let config = load_server_config(config, host, port)?;
    info!(host = %config.host(), port = config.port(), "Starting noughts HTTP server");

    let store = GameStore::new();
    noughts_server::serve(&config, store)
        .await
        .with_context(|| format!("Server on {}:{} failed", config.host(), config.port()))?;

    Ok(())
}

/// Defaults, then the TOML file, then environment, then flags.
#[instrument(skip_all)]
fn load_server_config(
    path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<ServerConfig> {
    let config = match path {
        Some(path) => ServerConfig::from_file(&path)?,
        None => ServerConfig::default(),
    };

    let config = config
        .with_env(|key| std::env::var(key).ok())?
        .with_host(host)
        .with_port(port);

    Ok(config)
}
