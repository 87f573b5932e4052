//! tictac - console tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tictac::cli::{Cli, Command};
use tictac::{ConsoleGame, Terminal, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play(args) => {
            let config = args.resolve()?;
            run_console(&config)
        }
        Command::Simulate { games, seed } => {
            let tally = simulate(games, seed)?;
            println!("{}", tally);
            Ok(())
        }
    }
}

/// Logs go to stderr (or a file) so they never interleave with the board.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[instrument(skip_all)]
fn run_console(config: &tictac::MatchConfig) -> Result<()> {
    info!("Starting console match");
    let mut game = ConsoleGame::from_config(config, Terminal::stdio())?;
    game.run()
}
