//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts and crosses on the console or over HTTP
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a local two-player game in this terminal
    Console,

    /// Run the HTTP game server
    Serve {
        /// Port to bind to [default: 3000]
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to [default: 127.0.0.1]
        #[arg(long)]
        host: Option<String>,

        /// TOML file with `host` and `port` keys
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
