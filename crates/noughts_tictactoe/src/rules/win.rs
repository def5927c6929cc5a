//! Win detection logic.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Checks whether `mark` holds three in a row anywhere on the board.
///
/// Called after every move with the mark just placed, so only that player
/// can have won.
#[instrument(level = "trace", skip(board))]
pub fn evaluate_win(board: &Board, mark: Mark) -> bool {
    let cells = board.rows();
    let target = Cell::Marked(mark);

    // Row i and column i together; stop early once neither can still win.
    for i in 0..3 {
        let mut row_win = true;
        let mut column_win = true;
        for j in 0..3 {
            if !(row_win || column_win) {
                break;
            }
            row_win = row_win && cells[i][j] == target;
            column_win = column_win && cells[j][i] == target;
        }
        if row_win || column_win {
            return true;
        }
    }

    // Both diagonals run through the centre.
    if cells[1][1] != target {
        return false;
    }
    let descending = cells[0][0] == target && cells[2][2] == target;
    let ascending = cells[0][2] == target && cells[2][0] == target;
    descending || ascending
}
