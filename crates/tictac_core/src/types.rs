//! Core domain types for tic-tac-toe.

use crate::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Mark a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Symbol {
    /// Symbol X (moves first by convention).
    X,
    /// Symbol O.
    O,
}

impl Symbol {
    /// Returns the complementary symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Returns the symbol as a single character.
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Symbol {
    type Err = GameError;

    /// Parses `"X"` or `"O"`, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "X" => Ok(Symbol::X),
            "O" => Ok(Symbol::O),
            other => Err(GameError::InvalidSymbol(other.to_string())),
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Symbol::X),
            'O' => Ok(Symbol::O),
            other => Err(GameError::InvalidSymbol(other.to_string())),
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked with a symbol.
    Marked(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }

    /// Returns true if no symbol has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Zero-based board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate pair.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
