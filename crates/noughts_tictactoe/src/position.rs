//! Board coordinates.

use crate::error::GameError;

/// A cell address on the board, row and column both in `0..=2`.
///
/// The only way to build one is through [`Position::new`], so every
/// `Position` in circulation is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Board width and height.
    pub const SIZE: usize = 3;

    /// Creates a position, rejecting coordinates off the board.
    pub fn new(row: usize, column: usize) -> Result<Self, GameError> {
        if row >= Self::SIZE || column >= Self::SIZE {
            return Err(GameError::OutOfBounds { row, column });
        }
        Ok(Self { row, column })
    }

    /// Zero-based row, top to bottom.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column, left to right.
    pub fn column(self) -> usize {
        self.column
    }

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::SIZE)
            .flat_map(|row| (0..Self::SIZE).map(move |column| Position { row, column }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
