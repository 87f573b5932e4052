//! Player identity: a display name bound to a symbol.

use crate::{Board, GameError, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A named participant holding one symbol for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    /// Creates a player from symbol text such as `"x"` or `" O "`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSymbol`] if the text is not X or O.
    #[instrument(skip(name))]
    pub fn parse(name: impl Into<String>, symbol: &str) -> Result<Self, GameError> {
        Ok(Self::new(name, symbol.parse()?))
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Places this player's symbol at `(row, col)`.
    ///
    /// Placement failures from the board are returned unchanged.
    #[instrument(skip(self, board), fields(player = %self.name, symbol = %self.symbol))]
    pub fn make_move(&self, board: &mut Board, row: usize, col: usize) -> Result<(), GameError> {
        board.place_mark(row, col, self.symbol)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_parse_validates_symbol() {
        let player = Player::parse("Alice", " x").unwrap();
        assert_eq!(player.symbol(), Symbol::X);
        assert_eq!(player.name(), "Alice");

        assert!(matches!(
            Player::parse("Bob", "Q"),
            Err(GameError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn test_make_move_uses_own_symbol() {
        let mut board = Board::new();
        let player = Player::new("Bob", Symbol::O);
        player.make_move(&mut board, 2, 0).unwrap();
        assert_eq!(board.cell(2, 0), Ok(Cell::Marked(Symbol::O)));
    }

    #[test]
    fn test_make_move_propagates_board_errors() {
        let mut board = Board::new();
        let player = Player::new("Bob", Symbol::O);
        player.make_move(&mut board, 0, 0).unwrap();
        assert_eq!(
            player.make_move(&mut board, 0, 0),
            Err(GameError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            player.make_move(&mut board, 0, 5),
            Err(GameError::CoordinateOutOfRange { row: 0, col: 5 })
        );
    }
}
