//! Unattended random-versus-random matches.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictac_core::{GameEngine, GameStatus, Player, RandomMover, Symbol};
use tracing::{debug, info, instrument};

/// Outcome counts over a batch of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Total games counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Symbol::X) => self.x_wins += 1,
            GameStatus::Won(Symbol::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.total(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays `games` random-versus-random games on one reused engine.
#[instrument]
pub fn simulate(games: u32, seed: Option<u64>) -> Result<Tally> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut mover = RandomMover::new(rng);
    let mut engine = GameEngine::new(
        Player::new("Random X", Symbol::X),
        Player::new("Random O", Symbol::O),
    )?;
    let mut tally = Tally::default();

    for game in 0..games {
        engine.reset();
        while !engine.is_over() {
            let coord = mover.choose_move(engine.board())?;
            engine.apply_move(coord.row, coord.col)?;
        }
        debug!(game, status = %engine.status(), moves = engine.history().len(), "Game finished");
        tally.record(engine.status());
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}
