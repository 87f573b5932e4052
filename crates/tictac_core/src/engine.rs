//! Game engine: board ownership, turn order and terminal detection.

use crate::{Board, Coord, GameError, Move, Player, Symbol, rules};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line of this symbol.
    Won(Symbol),
    /// Game ended with a full board and no line.
    Draw,
}

impl GameStatus {
    /// Returns true for [`GameStatus::Won`] and [`GameStatus::Draw`].
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning symbol if the game was won.
    pub fn winning_symbol(self) -> Option<Symbol> {
        match self {
            GameStatus::Won(symbol) => Some(symbol),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(symbol) => write!(f, "{} wins", symbol),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the board and both seats. The board only changes through
/// [`GameEngine::apply_move`] and [`GameEngine::reset`], and a failed move
/// leaves every field as it was.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    players: [Player; 2],
    pub(crate) turn: usize,
    status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine for two players, seating the X holder first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerSetup`] unless one player holds X
    /// and the other holds O.
    #[instrument(skip_all, fields(a = %a, b = %b))]
    pub fn new(a: Player, b: Player) -> Result<Self, GameError> {
        if b.symbol() == Symbol::X && a.symbol() == Symbol::O {
            Self::with_order(b, a)
        } else {
            Self::with_order(a, b)
        }
    }

    /// Creates an engine where `first` moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerSetup`] unless the two symbols form
    /// the pair {X, O}.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn with_order(first: Player, second: Player) -> Result<Self, GameError> {
        let seats = [first, second];
        if let Some(missing) = Symbol::iter().find(|s| seats.iter().all(|p| p.symbol() != *s)) {
            return Err(GameError::InvalidPlayerSetup(format!(
                "no player holds {}; players need one X and one O",
                missing
            )));
        }

        info!("New game");
        Ok(Self {
            board: Board::new(),
            players: seats,
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        })
    }

    /// Applies a move at `(row, col)` for the player whose turn it is.
    ///
    /// On success returns the new status. The turn passes to the other seat
    /// only when the game is still in progress.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyOver`] once the game is won or drawn.
    /// - Any placement error from the board. The same player keeps the turn.
    #[instrument(skip(self), fields(player = %self.players[self.turn]))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            debug!(status = %self.status, "Move rejected after game end");
            return Err(GameError::GameAlreadyOver);
        }

        let player = &self.players[self.turn];
        player.make_move(&mut self.board, row, col)?;
        self.history.push(Move::new(player.symbol(), Coord::new(row, col)));

        if let Some(symbol) = rules::check_winner(&self.board) {
            info!(%symbol, "Game won");
            self.status = GameStatus::Won(symbol);
        } else if rules::is_draw(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.turn ^= 1;
        }

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(self.status)
    }

    /// Returns every empty cell in row-major order.
    pub fn legal_moves(&self) -> Vec<Coord> {
        self.board.available_moves()
    }

    /// Clears the board and history and gives the turn back to the first seat.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.turn = 0;
        self.status = GameStatus::InProgress;
        info!("Game reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both seats in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player to move, or the last mover once the game is over.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Returns the seat index (0 or 1) of [`GameEngine::current_player`].
    pub fn current_seat(&self) -> usize {
        self.turn
    }

    /// Returns the player holding `symbol`.
    pub fn player_for(&self, symbol: Symbol) -> &Player {
        if self.players[0].symbol() == symbol {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winning symbol if the game was won.
    pub fn winning_symbol(&self) -> Option<Symbol> {
        self.status.winning_symbol()
    }

    /// Returns the winning player if the game was won.
    pub fn winner(&self) -> Option<&Player> {
        self.winning_symbol().map(|symbol| self.player_for(symbol))
    }

    /// Returns the moves applied since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        if let Err(violated) = crate::invariants::EngineInvariants::check(self) {
            panic!("Engine invariant violated: {}", violated.join("; "));
        }
    }
}
