//! Core domain types for noughts and crosses.

use crate::error::GameError;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Mark {
    /// Cross (moves first).
    #[serde(rename = "X")]
    #[strum(serialize = "X")]
    Cross,
    /// Nought.
    #[serde(rename = "0")]
    #[strum(serialize = "0")]
    Nought,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }
}

/// A single square on the board.
///
/// Serialized as a one-character string: `" "` when empty, otherwise the
/// mark's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Claimed by a player.
    Marked(Mark),
}

impl Cell {
    /// Text used when rendering this cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Marked(mark) => mark.into(),
        }
    }

    /// True if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.symbol().to_owned()
    }
}

impl TryFrom<String> for Cell {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            " " => Ok(Cell::Empty),
            other => other
                .parse::<Mark>()
                .map(Cell::Marked)
                .map_err(|_| GameError::MalformedRequest(format!("unknown cell {other:?}"))),
        }
    }
}

/// 3x3 noughts and crosses board.
///
/// A cell goes from empty to marked exactly once and is never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `position`.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.row()][position.column()]
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// True once every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Claims an empty cell for `mark`.
    pub(crate) fn place(&mut self, position: Position, mark: Mark) {
        debug_assert!(
            self.get(position).is_empty(),
            "cell {position} claimed twice"
        );
        self.cells[position.row()][position.column()] = Cell::Marked(mark);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "-------")?;
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                write!(f, "{}|", cell.symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "-------")
    }
}

/// Identifier of a game held by a store.
///
/// Ids are 1-based and equal to the game's insertion position.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    /// Wraps a raw id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}
