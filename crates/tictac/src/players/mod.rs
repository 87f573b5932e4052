//! Move sources: anything that can pick the next cell for a seat.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanInput;

use crate::Terminal;
use anyhow::Result;
use tictac_core::{Board, Coord, Player};

/// Trait for seats that can choose a move.
///
/// Implementations may talk to the player through the terminal. The returned
/// coordinates are zero-based and still go through engine validation.
pub trait MoveSource<R, W> {
    /// Gets the next move for `player` on `board`.
    fn next_move(
        &mut self,
        board: &Board,
        player: &Player,
        terminal: &mut Terminal<R, W>,
    ) -> Result<Coord>;
}
