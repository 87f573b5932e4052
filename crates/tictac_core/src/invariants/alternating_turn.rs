//! Alternating turn invariant: seats take turns, starting with the first.

use super::EngineInvariant;
use crate::GameEngine;

/// Invariant: recorded moves alternate symbols starting with the first seat,
/// and the current seat agrees with the history.
///
/// While the game is in progress the current seat is the one due next. Once
/// it is over the turn stays with the player who made the final move.
pub struct AlternatingTurnInvariant;

impl EngineInvariant for AlternatingTurnInvariant {
    const DESCRIPTION: &'static str = "Players alternate turns starting with the first seat";

    fn holds(game: &GameEngine) -> bool {
        let first = game.players()[0].symbol();
        let expected = |index: usize| if index % 2 == 0 { first } else { first.opponent() };

        let history = game.history();
        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.symbol == expected(i));

        let current = game.current_player().symbol();
        let turn_consistent = if game.is_over() {
            history.last().is_some_and(|mov| mov.symbol == current)
        } else {
            current == expected(history.len())
        };

        alternates && turn_consistent
    }
}
