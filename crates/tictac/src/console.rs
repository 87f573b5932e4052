//! Console game loop.

use crate::config::{MatchConfig, Opponent};
use crate::input::{name_or_default, wants_another_game};
use crate::players::{ComputerPlayer, HumanInput, MoveSource};
use crate::Terminal;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictac_core::{GameEngine, GameStatus, Player, RandomMover, Symbol};
use tracing::{debug, info, instrument, warn};

/// A two-seat tic-tac-toe match driven through a terminal.
///
/// Seat `i` of the engine is played by `sources[i]`. Errors from the engine
/// are printed and the same seat is asked again.
pub struct ConsoleGame<R, W> {
    engine: GameEngine,
    sources: [Box<dyn MoveSource<R, W>>; 2],
    terminal: Terminal<R, W>,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Creates a match from an engine and one move source per seat.
    pub fn new(
        engine: GameEngine,
        sources: [Box<dyn MoveSource<R, W>>; 2],
        terminal: Terminal<R, W>,
    ) -> Self {
        Self {
            engine,
            sources,
            terminal,
        }
    }

    /// Builds a match from configuration, asking for any missing names.
    ///
    /// X is always a human. O is a human or the computer depending on
    /// [`MatchConfig::opponent`]. Blank names, whether configured or typed,
    /// fall back to `Player X`, `Player O` or `Computer`.
    #[instrument(skip_all, fields(opponent = ?config.opponent()))]
    pub fn from_config(config: &MatchConfig, mut terminal: Terminal<R, W>) -> Result<Self> {
        let x_name = match config.player_x() {
            Some(name) => name_or_default(name, "Player X"),
            None => ask_name(&mut terminal, "Enter Player X name: ", "Player X")?,
        };

        let (o_name, o_source): (String, Box<dyn MoveSource<R, W>>) = match config.opponent() {
            Opponent::Human => {
                let name = match config.player_o() {
                    Some(name) => name_or_default(name, "Player O"),
                    None => ask_name(&mut terminal, "Enter Player O name: ", "Player O")?,
                };
                let source: Box<dyn MoveSource<R, W>> = Box::new(HumanInput);
                (name, source)
            }
            Opponent::Computer => {
                let fallback = name_or_default(config.computer_name(), "Computer");
                let name = match config.player_o() {
                    Some(name) => name_or_default(name, &fallback),
                    None => fallback,
                };
                let mover = match config.seed() {
                    Some(seed) => RandomMover::seeded(*seed),
                    None => RandomMover::from_entropy(),
                };
                let source: Box<dyn MoveSource<R, W>> = Box::new(ComputerPlayer::new(mover));
                (name, source)
            }
        };

        let engine = GameEngine::with_order(
            Player::new(x_name, Symbol::X),
            Player::new(o_name, Symbol::O),
        )?;
        info!(x = %engine.players()[0], o = %engine.players()[1], "Match ready");

        let x_source: Box<dyn MoveSource<R, W>> = Box::new(HumanInput);
        Ok(Self::new(engine, [x_source, o_source], terminal))
    }

    /// Plays games until the players decline a rematch or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.terminal.say("=== Tic Tac Toe (Console) ===")?;
        loop {
            self.play_once()?;
            let again = self.terminal.ask("\nPlay again? (y/n): ")?;
            if !again.as_deref().is_some_and(wants_another_game) {
                self.terminal.say("Goodbye!")?;
                return Ok(());
            }
            self.engine.reset();
        }
    }

    /// Plays one game to a win or draw and announces the result.
    #[instrument(skip(self))]
    pub fn play_once(&mut self) -> Result<GameStatus> {
        while !self.engine.is_over() {
            self.show_board()?;

            let seat = self.engine.current_seat();
            let player = self.engine.current_player().clone();
            let coord = self.sources[seat]
                .next_move(self.engine.board(), &player, &mut self.terminal)
                .with_context(|| format!("Failed to get a move for {}", player.name()))?;

            match self.engine.apply_move(coord.row, coord.col) {
                Ok(status) => debug!(%coord, %status, "Move applied"),
                Err(e) => {
                    warn!(%coord, error = %e, "Move rejected");
                    self.terminal.say(format!("❌ {}", e))?;
                }
            }
        }

        self.show_board()?;
        self.announce()?;
        Ok(self.engine.status())
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the terminal.
    pub fn terminal(&self) -> &Terminal<R, W> {
        &self.terminal
    }

    fn show_board(&mut self) -> Result<()> {
        self.terminal.say("\nCurrent board:")?;
        self.terminal.say(self.engine.board())?;
        self.terminal.say("\nCoordinates: rows/cols can be 0..2 or 1..3")?;
        self.terminal.say("  (row col) e.g., 0 2  or  1 3")?;
        Ok(())
    }

    fn announce(&mut self) -> Result<()> {
        match self.engine.winner() {
            Some(winner) => {
                let message = format!("\n🎉 {} wins! ({})", winner.symbol(), winner.name());
                self.terminal.say(message)?;
            }
            None => self.terminal.say("\n🤝 It's a draw!")?,
        }
        Ok(())
    }
}

fn ask_name<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    prompt: &str,
    fallback: &str,
) -> Result<String> {
    let raw = terminal.ask(prompt)?.unwrap_or_default();
    Ok(name_or_default(&raw, fallback))
}
