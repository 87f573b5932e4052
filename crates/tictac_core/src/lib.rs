//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with validated, write-once placement
//! - **Player**: a display name bound to a [`Symbol`]
//! - **RandomMover**: uniform random move selection from an injected RNG
//! - **GameEngine**: turn order, win/draw detection and terminal lock
//!
//! Nothing in this crate performs I/O. Every failure is a [`GameError`]
//! returned to the caller, and failed operations leave state untouched.
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameEngine, GameStatus, Player, Symbol};
//!
//! # fn main() -> Result<(), tictac_core::GameError> {
//! let mut game = GameEngine::new(
//!     Player::new("Alice", Symbol::X),
//!     Player::new("Bob", Symbol::O),
//! )?;
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.apply_move(row, col)?;
//! }
//! assert_eq!(game.apply_move(0, 2)?, GameStatus::Won(Symbol::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
pub mod invariants;
mod mover;
mod player;
pub mod rules;
mod types;

pub use action::Move;
pub use board::Board;
pub use engine::{GameEngine, GameStatus};
pub use error::GameError;
pub use mover::RandomMover;
pub use player::Player;
pub use types::{Cell, Coord, Symbol};
