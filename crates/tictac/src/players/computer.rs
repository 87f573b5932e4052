//! Computer player choosing random empty cells.

use super::MoveSource;
use crate::Terminal;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tictac_core::{Board, Coord, Player, RandomMover};
use tracing::instrument;

/// Computer player backed by a [`RandomMover`].
#[derive(Debug, Clone)]
pub struct ComputerPlayer<G> {
    mover: RandomMover<G>,
}

impl<G: Rng> ComputerPlayer<G> {
    /// Creates a computer player around `mover`.
    pub fn new(mover: RandomMover<G>) -> Self {
        Self { mover }
    }
}

impl<R: BufRead, W: Write, G: Rng> MoveSource<R, W> for ComputerPlayer<G> {
    #[instrument(skip_all, fields(player = %player.name()))]
    fn next_move(
        &mut self,
        board: &Board,
        player: &Player,
        terminal: &mut Terminal<R, W>,
    ) -> Result<Coord> {
        let coord = self.mover.choose_move(board)?;
        terminal.say(format!(
            "\n{} (computer) chose: {} {}",
            player.name(),
            coord.row + 1,
            coord.col + 1
        ))?;
        Ok(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictac_core::Symbol;

    #[test]
    fn test_announces_one_based_choice() {
        let mut board = Board::new();
        for coord in board.available_moves() {
            if coord != Coord::new(2, 0) {
                board.place_mark(coord.row, coord.col, Symbol::X).unwrap();
            }
        }
        let mut terminal = Terminal::new(Cursor::new(""), Vec::new());
        let player = Player::new("HAL", Symbol::O);
        let mut computer = ComputerPlayer::new(RandomMover::seeded(5));

        let coord = computer.next_move(&board, &player, &mut terminal).unwrap();
        assert_eq!(coord, Coord::new(2, 0));
        assert!(String::from_utf8_lossy(terminal.output()).contains("HAL (computer) chose: 3 1"));
    }
}
