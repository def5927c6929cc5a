//! Concurrent multi-game store.
//!
//! Two lock levels keep games independent:
//!
//! 1. The store-wide lock guards the list of games. It is held only while a
//!    game is appended or an id is resolved to its handle.
//! 2. Each game has its own lock guarding the board and turn state.
//!
//! Locks are always taken store first, and the store lock is released before
//! a game lock is requested. Moves on different games therefore never wait on
//! each other; moves on the same game run one at a time.

use noughts_tictactoe::{Game, GameError, GameId, GameSnapshot, Mark, Position};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Exclusive access point for one game in the store.
///
/// Cloning a handle is cheap and yields another reference to the same game.
#[derive(Debug, Clone)]
pub struct GameHandle {
    id: GameId,
    game: Arc<Mutex<Game>>,
}

impl GameHandle {
    /// Id the handle was resolved from.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Blocks until this game is free and returns exclusive access to it.
    ///
    /// Game mutations never panic part way, so a poisoned lock still guards a
    /// consistent game and is recovered.
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owns every game created during the process lifetime.
///
/// Clones share the same underlying games.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Arc<Mutex<Vec<GameHandle>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self::default()
    }

    fn games(&self) -> MutexGuard<'_, Vec<GameHandle>> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a fresh game and returns its id.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> GameId {
        let mut games = self.games();
        let id = GameId::new(games.len() as u64 + 1);
        games.push(GameHandle {
            id,
            game: Arc::new(Mutex::new(Game::new())),
        });
        info!(%id, "Created new game");
        id
    }

    /// Resolves an id to its game.
    ///
    /// The store lock is released before this returns.
    #[instrument(skip(self))]
    pub fn lookup(&self, id: GameId) -> Result<GameHandle, GameError> {
        let games = self.games();
        let handle = usize::try_from(id.get())
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| games.get(index))
            .cloned();

        match handle {
            Some(handle) => {
                debug!(%id, "Resolved game");
                Ok(handle)
            }
            None => {
                debug!(%id, count = games.len(), "Game not found");
                Err(GameError::GameNotFound(id))
            }
        }
    }

    /// Plays a move on game `id` as `player` and returns the resulting state.
    #[instrument(skip(self))]
    pub fn submit_move(
        &self,
        id: GameId,
        row: usize,
        column: usize,
        player: Mark,
    ) -> Result<GameSnapshot, GameError> {
        let handle = self.lookup(id)?;
        let position = Position::new(row, column)?;
        let mut game = handle.lock();

        if let Err(e) = game.play_as(player, position) {
            warn!(%id, error = %e, "Move rejected");
            return Err(e);
        }

        info!(
            %id,
            %player,
            %position,
            status = ?game.status(),
            "Move accepted"
        );
        Ok(game.snapshot())
    }

    /// Returns the current state of game `id`.
    #[instrument(skip(self))]
    pub fn get_snapshot(&self, id: GameId) -> Result<GameSnapshot, GameError> {
        let handle = self.lookup(id)?;
        let game = handle.lock();
        Ok(game.snapshot())
    }

    /// Number of games created so far.
    pub fn len(&self) -> usize {
        self.games().len()
    }

    /// True if no game has been created.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
