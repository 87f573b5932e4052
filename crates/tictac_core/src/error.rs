//! Error type shared by the board, players and engine.

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: the caller reports it and asks the same
/// player again. Engine state is never changed by a failed operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Row or column lies outside the board.
    #[display("Row/Col out of range (got {row},{col}). Use 0..2.")]
    CoordinateOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Text that does not name a known symbol.
    #[display("Invalid symbol '{}'. Use 'X' or 'O'.", _0)]
    InvalidSymbol(String),

    /// The target cell already holds a mark.
    #[display("Cell ({row},{col}) is already occupied.")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game reached a win or draw and needs a reset.
    #[display("Game is over. Reset to play again.")]
    GameAlreadyOver,

    /// The two players do not hold one X and one O.
    #[display("Invalid player setup: {}", _0)]
    InvalidPlayerSetup(String),

    /// A move was requested from a full board.
    #[display("No moves available on a full board.")]
    NoMovesAvailable,
}

impl std::error::Error for GameError {}
