//! Monotonic board invariant: cells never change once marked.

use super::EngineInvariant;
use crate::{Board, GameEngine};

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must succeed cell by cell
/// and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl EngineInvariant for MonotonicBoardInvariant {
    const DESCRIPTION: &'static str = "Board cells are monotonic (never overwritten)";

    fn holds(game: &GameEngine) -> bool {
        let mut replayed = Board::new();
        let replay_ok = game.history().iter().all(|mov| {
            replayed
                .place_mark(mov.coord.row, mov.coord.col, mov.symbol)
                .is_ok()
        });
        replay_ok && replayed == *game.board()
    }
}
