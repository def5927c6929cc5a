//! Multi-game noughts and crosses server.
//!
//! # Architecture
//!
//! - **Store**: grow-only collection of games with a store-wide lock and one
//!   lock per game
//! - **HTTP**: axum routes translating requests into store operations
//! - **Config**: bind address from defaults, TOML, environment and flags
//!
//! # Example
//!
//! ```no_run
//! use noughts_server::{GameStore, ServerConfig, serve};
//!
//! # async fn example() -> std::io::Result<()> {
//! let store = GameStore::new();
//! serve(&ServerConfig::default(), store).await
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod http;
mod server;
mod store;

pub use config::{ConfigError, HOST_ENV, PORT_ENV, ServerConfig};
pub use error::ApiError;
pub use http::{CreatedGame, Health, MoveRequest, router};
pub use server::serve;
pub use store::{GameHandle, GameStore};
