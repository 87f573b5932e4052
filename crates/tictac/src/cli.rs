//! Command-line interface for tictac.

use crate::config::{ConfigError, MatchConfig, Opponent};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::instrument;

/// Tic-tac-toe at the console, against a friend or a random computer player
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively at the console
    Play(PlayArgs),

    /// Pit two random players against each other and print the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Options for an interactive match
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// TOML file with match settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the X player
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name of the O player
    #[arg(long)]
    pub player_o: Option<String>,

    /// Play O with the random computer player
    #[arg(long)]
    pub vs_computer: bool,

    /// Display name of the computer player
    #[arg(long)]
    pub computer_name: Option<String>,

    /// Seed for the computer player's choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayArgs {
    /// Loads the config file, if any, and applies flags on top of it.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn resolve(&self) -> Result<MatchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::from_file(path)?,
            None => MatchConfig::default(),
        };
        if self.vs_computer {
            config = config.with_opponent(Opponent::Computer);
        }
        Ok(config
            .with_player_x(self.player_x.clone())
            .with_player_o(self.player_o.clone())
            .with_computer_name(self.computer_name.clone())
            .with_seed(self.seed))
    }
}
