//! First-class move records.

use crate::{Coord, Symbol};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a symbol placed at a coordinate.
///
/// The engine records every applied move so the board can be replayed and
/// checked against its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol that was placed.
    pub symbol: Symbol,
    /// Where it was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(symbol: Symbol, coord: Coord) -> Self {
        Self { symbol, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.coord)
    }
}
