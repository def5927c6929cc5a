//! Noughts and crosses game logic.
//!
//! This crate holds the rules only: the board, move validation, win and
//! draw detection, and turn sequencing. It performs no I/O; the console and
//! HTTP front ends in the other workspace crates drive it.
//!
//! # Example
//!
//! ```
//! use noughts_tictactoe::{Game, GameStatus, Mark, Position};
//!
//! # fn example() -> Result<(), noughts_tictactoe::GameError> {
//! let mut game = Game::new();
//! let centre = Position::new(1, 1)?;
//!
//! game.validate_move(centre)?;
//! let finished = game.apply_move(centre);
//!
//! assert!(!finished);
//! assert_eq!(game.next_to_play(), Mark::Nought);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
mod rules;
mod types;

pub use error::GameError;
pub use game::{Game, GameSnapshot, GameStatus};
pub use position::Position;
pub use rules::evaluate_win;
pub use types::{Board, Cell, GameId, Mark};
