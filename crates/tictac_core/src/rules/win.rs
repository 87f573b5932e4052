//! Win detection logic for tic-tac-toe.

use crate::{Board, Coord, Symbol};
use tracing::instrument;

/// The eight winning lines: rows top-to-bottom, columns left-to-right,
/// then the main and anti diagonal.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    // Columns
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    // Diagonals
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the symbol of the first uniformly marked line in [`LINES`] order,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    LINES.iter().find_map(|&[a, b, c]| {
        let symbol = board.at(a).symbol()?;
        (board.at(b).symbol() == Some(symbol) && board.at(c).symbol() == Some(symbol))
            .then_some(symbol)
    })
}
