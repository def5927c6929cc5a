//! Errors raised while playing a game.

use crate::position::Position;
use crate::types::{GameId, Mark};

/// Reasons a move or lookup can be refused.
///
/// Every variant is a recoverable condition reported back to whoever asked;
/// none of them leave a game in a changed state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The target cell already holds a mark.
    #[display("Location {} has already been played", _0)]
    AlreadyOccupied(Position),

    /// The game has been won or drawn.
    #[display("Game is already finished")]
    GameFinished,

    /// A move was submitted for the player who is not next.
    #[display("It is {}'s turn, not {}'s", expected, actual)]
    WrongPlayer {
        /// Mark whose turn it is.
        expected: Mark,
        /// Mark that tried to move.
        actual: Mark,
    },

    /// No game exists under the requested id.
    #[display("Game {} not found", _0)]
    GameNotFound(GameId),

    /// The request could not be understood.
    #[display("Malformed request: {}", _0)]
    MalformedRequest(String),

    /// Coordinates fall outside the board.
    #[display("Position ({}, {}) is off the board", row, column)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}

impl std::error::Error for GameError {}
