//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is a draw: full, with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
