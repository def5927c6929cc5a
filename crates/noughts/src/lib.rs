//! Noughts and crosses front ends.
//!
//! - **Console**: one local game, both players at the same keyboard
//! - **Serve**: the multi-game REST API from `noughts_server`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod console;

pub use console::{Console, ConsoleError};
