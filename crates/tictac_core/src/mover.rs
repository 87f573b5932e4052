//! Automated move selection.

use crate::{Board, Coord, GameError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks a uniformly random empty cell.
///
/// The random source is injected so games can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct RandomMover<R> {
    rng: R,
}

impl<R: Rng> RandomMover<R> {
    /// Creates a mover drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses one of the board's available moves.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoMovesAvailable`] if the board is full.
    #[instrument(skip_all)]
    pub fn choose_move(&mut self, board: &Board) -> Result<Coord, GameError> {
        let choice = board
            .available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoMovesAvailable)?;
        debug!(%choice, "Random mover chose cell");
        Ok(choice)
    }
}

impl RandomMover<StdRng> {
    /// Creates a deterministic mover from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a mover seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;
    use std::collections::HashSet;

    #[test]
    fn test_never_picks_occupied_cell() {
        for seed in 0..50 {
            let mut mover = RandomMover::seeded(seed);
            let mut board = Board::new();
            let mut symbol = Symbol::X;
            while !board.is_full() {
                let coord = mover.choose_move(&board).unwrap();
                assert_eq!(board.is_cell_empty(coord.row, coord.col), Ok(true));
                board.place_mark(coord.row, coord.col, symbol).unwrap();
                symbol = symbol.opponent();
            }
        }
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new();
        for coord in board.available_moves() {
            board.place_mark(coord.row, coord.col, Symbol::X).unwrap();
        }
        let mut mover = RandomMover::seeded(7);
        assert_eq!(mover.choose_move(&board), Err(GameError::NoMovesAvailable));
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let mut board = Board::new();
        for coord in board.available_moves() {
            if coord != Coord::new(1, 2) {
                board.place_mark(coord.row, coord.col, Symbol::O).unwrap();
            }
        }
        let mut mover = RandomMover::seeded(3);
        assert_eq!(mover.choose_move(&board), Ok(Coord::new(1, 2)));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomMover::seeded(42);
        let mut b = RandomMover::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board), b.choose_move(&board));
        }
    }

    #[test]
    fn test_covers_every_empty_cell() {
        let board = Board::new();
        let mut mover = RandomMover::seeded(1);
        let seen: HashSet<Coord> = (0..500)
            .map(|_| mover.choose_move(&board).unwrap())
            .collect();
        assert_eq!(seen.len(), Board::CELLS);
    }
}
