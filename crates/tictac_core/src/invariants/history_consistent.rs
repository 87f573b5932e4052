//! History consistency invariant: one history entry per marked cell.

use super::EngineInvariant;
use crate::GameEngine;

/// Invariant: the number of recorded moves equals the number of marked cells.
pub struct HistoryConsistentInvariant;

impl EngineInvariant for HistoryConsistentInvariant {
    const DESCRIPTION: &'static str = "History length matches marked cells";

    fn holds(game: &GameEngine) -> bool {
        game.history().len() == game.board().occupied_count()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::engine_after;
    use super::*;

    #[test]
    fn test_history_matches_board() {
        assert!(HistoryConsistentInvariant::holds(&engine_after(&[(0, 1), (1, 0)])));
    }

    #[test]
    fn test_dropped_history_violates() {
        let mut game = engine_after(&[(0, 1), (1, 0)]);
        game.history.pop();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
