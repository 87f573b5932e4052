//! 3x3 board storage with validated placement.

use crate::{Cell, Coord, GameError, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells move from [`Cell::Empty`] to [`Cell::Marked`] exactly once per game.
/// The only way to clear a mark is [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; Board::SIZE]; Board::SIZE],
}

impl Board {
    /// Number of rows and columns.
    pub const SIZE: usize = 3;

    /// Total number of cells.
    pub const CELLS: usize = Self::SIZE * Self::SIZE;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `symbol` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`GameError::CoordinateOutOfRange`] if either index is outside `0..3`.
    /// - [`GameError::CellOccupied`] if the cell already holds a mark.
    ///
    /// The board is left untouched on error.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), GameError> {
        if !self.cell(row, col)?.is_empty() {
            debug!("Rejected placement on occupied cell");
            return Err(GameError::CellOccupied { row, col });
        }
        self.cells[row][col] = Cell::Marked(symbol);
        Ok(())
    }

    /// Returns the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Self::validate(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Returns the cell at an already validated coordinate.
    pub(crate) fn at(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    #[cfg(test)]
    pub(crate) fn cells_mut(&mut self) -> &mut [[Cell; Board::SIZE]; Board::SIZE] {
        &mut self.cells
    }

    /// Checks whether `(row, col)` is still empty.
    pub fn is_cell_empty(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.cell(row, col)?.is_empty())
    }

    /// Lists every empty cell in row-major order.
    ///
    /// The list is a snapshot; later placements do not update it.
    pub fn available_moves(&self) -> Vec<Coord> {
        Self::coords().filter(|&c| self.at(c).is_empty()).collect()
    }

    /// Returns the number of marked cells.
    pub fn occupied_count(&self) -> usize {
        Self::coords().filter(|&c| !self.at(c).is_empty()).count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        Self::coords().all(|c| !self.at(c).is_empty())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; Self::SIZE]; Self::SIZE];
    }

    /// Formats the board as a human-readable string.
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                let marks: Vec<String> = row
                    .iter()
                    .map(|cell| cell.symbol().map_or(' ', Symbol::as_char).to_string())
                    .collect();
                format!(" {} ", marks.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n---+---+---\n")
    }

    fn coords() -> impl Iterator<Item = Coord> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Coord::new(row, col)))
    }

    fn validate(row: usize, col: usize) -> Result<(), GameError> {
        if row < Self::SIZE && col < Self::SIZE {
            Ok(())
        } else {
            Err(GameError::CoordinateOutOfRange { row, col })
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves().len(), Board::CELLS);
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_mark_fills_cell() {
        let mut board = Board::new();
        board.place_mark(1, 2, Symbol::O).unwrap();
        assert_eq!(board.cell(1, 2), Ok(Cell::Marked(Symbol::O)));
        assert_eq!(board.is_cell_empty(1, 2), Ok(false));
    }

    #[test]
    fn test_place_mark_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place_mark(3, 0, Symbol::X),
            Err(GameError::CoordinateOutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.is_cell_empty(0, 7),
            Err(GameError::CoordinateOutOfRange { row: 0, col: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_cell_is_not_overwritten() {
        let mut board = Board::new();
        board.place_mark(0, 0, Symbol::X).unwrap();
        let before = board.clone();

        for symbol in [Symbol::X, Symbol::O] {
            assert_eq!(
                board.place_mark(0, 0, symbol),
                Err(GameError::CellOccupied { row: 0, col: 0 })
            );
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_available_moves_row_major() {
        let mut board = Board::new();
        board.place_mark(0, 1, Symbol::X).unwrap();
        board.place_mark(2, 2, Symbol::O).unwrap();

        let moves = board.available_moves();
        assert_eq!(moves.first(), Some(&Coord::new(0, 0)));
        assert_eq!(moves.get(1), Some(&Coord::new(0, 2)));
        assert_eq!(moves.last(), Some(&Coord::new(2, 1)));
        assert_eq!(moves.len() + board.occupied_count(), Board::CELLS);
    }

    #[test]
    fn test_reset_matches_fresh_board() {
        let mut board = Board::new();
        board.place_mark(1, 1, Symbol::X).unwrap();
        board.place_mark(0, 2, Symbol::O).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_render_maps_cells_to_positions() {
        let mut board = Board::new();
        board.place_mark(0, 0, Symbol::X).unwrap();
        board.place_mark(1, 1, Symbol::O).unwrap();
        board.place_mark(2, 2, Symbol::X).unwrap();

        let expected = " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   | X ";
        assert_eq!(board.render(), expected);
        assert_eq!(board.to_string(), expected);
    }
}
