//! The game state machine.

use crate::error::GameError;
use crate::position::Position;
use crate::rules::evaluate_win;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of moves that fills the board.
const MAX_MOVES: u8 = 9;

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// The given mark made three in a row.
    Won(Mark),
    /// The board filled up with no winner.
    Drawn,
}

/// A single game of noughts and crosses.
///
/// The only mutation is [`Game::apply_move`]. Once finished, a game never
/// accepts another move and its winner never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    next_to_play: Mark,
    move_count: u8,
    winner: Option<Mark>,
    finished: bool,
}

impl Game {
    /// Creates an empty game with cross to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_to_play: Mark::Cross,
            move_count: 0,
            winner: None,
            finished: false,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn it is.
    pub fn next_to_play(&self) -> Mark {
        self.next_to_play
    }

    /// Moves accepted so far.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// True once the game has been won or drawn.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current status derived from the finished flag and winner.
    pub fn status(&self) -> GameStatus {
        match (self.finished, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(mark)) => GameStatus::Won(mark),
            (true, None) => GameStatus::Drawn,
        }
    }

    /// Checks that a move at `position` would be legal.
    ///
    /// An occupied cell is reported before a finished game, so occupied cells
    /// always yield [`GameError::AlreadyOccupied`].
    pub fn validate_move(&self, position: Position) -> Result<(), GameError> {
        if !self.board.get(position).is_empty() {
            return Err(GameError::AlreadyOccupied(position));
        }
        if self.finished {
            return Err(GameError::GameFinished);
        }
        Ok(())
    }

    /// Plays the current mark at `position` and returns whether the game is
    /// now finished.
    ///
    /// The move must already have passed [`Game::validate_move`]; it is not
    /// checked again here.
    #[instrument(skip(self), fields(mark = %self.next_to_play, move_count = self.move_count))]
    pub fn apply_move(&mut self, position: Position) -> bool {
        let mark = self.next_to_play;
        self.board.place(position, mark);
        self.move_count += 1;

        if evaluate_win(&self.board, mark) {
            info!(%mark, "Game won");
            self.winner = Some(mark);
            self.finished = true;
        } else if self.move_count == MAX_MOVES {
            info!("Board full, game drawn");
            self.finished = true;
        }

        self.next_to_play = mark.opponent();
        debug!(next = %self.next_to_play, finished = self.finished, "Move applied");
        self.finished
    }

    /// Plays a move on behalf of `player`, checking turn order and legality.
    ///
    /// Returns whether the game is now finished.
    #[instrument(skip(self))]
    pub fn play_as(&mut self, player: Mark, position: Position) -> Result<bool, GameError> {
        if player != self.next_to_play {
            return Err(GameError::WrongPlayer {
                expected: self.next_to_play,
                actual: player,
            });
        }
        self.validate_move(position)?;
        Ok(self.apply_move(position))
    }

    /// Copies out the observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            next_to_play: self.next_to_play,
            move_count: self.move_count,
            finished: self.finished,
            winner: self.winner,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only copy of a game, safe to hold without any lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameSnapshot {
    /// Board contents.
    pub board: Board,
    /// Mark whose turn it is.
    pub next_to_play: Mark,
    /// Moves accepted so far.
    pub move_count: u8,
    /// True once the game has been won or drawn.
    pub finished: bool,
    /// The winner, omitted while there is none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Mark>,
}
