//! Interactive single-game console front end.

use noughts_tictactoe::{Board, Game, GameError, Position};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Errors that end a console session early.
#[derive(Debug, derive_more::Display)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input ended before the game did.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The game refused a move the console cannot recover from.
    #[display("{}", _0)]
    Game(GameError),
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(e) => Some(e),
            ConsoleError::Game(e) => Some(e),
            ConsoleError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

impl From<GameError> for ConsoleError {
    fn from(err: GameError) -> Self {
        ConsoleError::Game(err)
    }
}

/// Plays one local game, reading coordinates from `input` and drawing to
/// `output`.
///
/// Both players share the same input; turns alternate automatically.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs a game to completion and returns it.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<Game, ConsoleError> {
        info!("Starting console game");
        let mut game = Game::new();
        self.show_board(game.board())?;

        while !game.is_finished() {
            let player = game.next_to_play();
            writeln!(self.output, "It is player {player}'s go")?;

            let position = self.read_move(&game)?;
            if game.apply_move(position) {
                match game.winner() {
                    Some(winner) => writeln!(self.output, "{winner} has won!!!")?,
                    None => writeln!(self.output, "The board is full and no-one has won")?,
                }
            }
            self.show_board(game.board())?;
        }

        info!(status = ?game.status(), "Console game finished");
        Ok(game)
    }

    /// Hands back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn show_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        writeln!(self.output, "{board}")?;
        Ok(())
    }

    /// Asks for coordinates until they name an empty cell.
    fn read_move(&mut self, game: &Game) -> Result<Position, ConsoleError> {
        loop {
            let row = self.read_coordinate("row")?;
            let column = self.read_coordinate("column")?;
            let position = Position::new(row, column)?;

            match game.validate_move(position) {
                Ok(()) => return Ok(position),
                Err(GameError::AlreadyOccupied(_)) => {
                    debug!(%position, "Occupied cell chosen");
                    writeln!(self.output, "That location has already been played")?;
                    self.show_board(game.board())?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Asks for one coordinate until a single digit 0, 1 or 2 is entered.
    fn read_coordinate(&mut self, name: &str) -> Result<usize, ConsoleError> {
        loop {
            writeln!(self.output, "Please enter the {name} to place your counter")?;
            self.output.flush()?;

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }

            match line.trim_ascii() {
                b"0" => return Ok(0),
                b"1" => return Ok(1),
                b"2" => return Ok(2),
                other => {
                    debug!(input = %String::from_utf8_lossy(other), "Invalid coordinate");
                    writeln!(self.output, "Invalid input. Please enter either 0, 1 or 2")?;
                }
            }
        }
    }
}
