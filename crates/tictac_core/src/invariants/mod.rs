//! Engine properties re-checked after every successful move.
//!
//! Each property lives in its own module and is checked by
//! [`EngineInvariants::check`]. The engine runs the check in debug builds.

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use crate::GameEngine;

/// A property every reachable engine state satisfies.
pub trait EngineInvariant {
    /// Shown when the property fails.
    const DESCRIPTION: &'static str;

    /// Returns true if `game` satisfies the property.
    fn holds(game: &GameEngine) -> bool;
}

/// The full set of engine invariants.
pub struct EngineInvariants;

impl EngineInvariants {
    /// Checks every invariant against `game`.
    ///
    /// # Errors
    ///
    /// Returns the description of each invariant that does not hold.
    pub fn check(game: &GameEngine) -> Result<(), Vec<&'static str>> {
        let violated: Vec<&'static str> = [
            (
                MonotonicBoardInvariant::holds(game),
                MonotonicBoardInvariant::DESCRIPTION,
            ),
            (
                AlternatingTurnInvariant::holds(game),
                AlternatingTurnInvariant::DESCRIPTION,
            ),
            (
                HistoryConsistentInvariant::holds(game),
                HistoryConsistentInvariant::DESCRIPTION,
            ),
        ]
        .into_iter()
        .filter_map(|(holds, description)| (!holds).then_some(description))
        .collect();

        if violated.is_empty() {
            Ok(())
        } else {
            Err(violated)
        }
    }
}
