//! Console tic-tac-toe built on [`tictac_core`].
//!
//! # Architecture
//!
//! - **Terminal**: line-oriented reader/writer pair
//! - **Players**: move sources for humans and the random computer
//! - **ConsoleGame**: the prompt/apply/announce loop with rematches
//! - **Simulate**: unattended random-versus-random batches
//! - **Config**: TOML match settings merged with CLI flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod console;
mod input;
mod players;
mod simulate;
mod terminal;

pub use config::{ConfigError, MatchConfig, Opponent};
pub use console::ConsoleGame;
pub use input::{InputError, name_or_default, parse_move, wants_another_game};
pub use players::{ComputerPlayer, HumanInput, MoveSource};
pub use simulate::{simulate, Tally};
pub use terminal::Terminal;
