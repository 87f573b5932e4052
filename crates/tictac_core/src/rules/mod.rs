//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so the engine and the invariant checks share one definition.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner};
