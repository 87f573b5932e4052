//! Human player typing coordinates at the console.

use super::MoveSource;
use crate::input::parse_move;
use crate::Terminal;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictac_core::{Board, Coord, Player};
use tracing::debug;

/// Human player reading moves from the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanInput;

impl<R: BufRead, W: Write> MoveSource<R, W> for HumanInput {
    fn next_move(
        &mut self,
        _board: &Board,
        player: &Player,
        terminal: &mut Terminal<R, W>,
    ) -> Result<Coord> {
        let prompt = format!(
            "\n{}'s turn ({}). Enter row and column: ",
            player.name(),
            player.symbol()
        );
        loop {
            let Some(line) = terminal.ask(&prompt)? else {
                bail!("Input closed while waiting for {}'s move", player.name());
            };
            match parse_move(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    debug!(input = %line, error = %e, "Rejected move text");
                    terminal.say(format!("❌ {}", e))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictac_core::Symbol;

    #[test]
    fn test_reprompts_until_valid() {
        let mut terminal = Terminal::new(Cursor::new("nonsense\n9 9\n2 3\n"), Vec::new());
        let player = Player::new("Ada", Symbol::X);

        let coord = HumanInput
            .next_move(&Board::new(), &player, &mut terminal)
            .unwrap();
        assert_eq!(coord, Coord::new(1, 2));

        let output = String::from_utf8_lossy(terminal.output()).to_string();
        assert_eq!(output.matches("Ada's turn (X)").count(), 3);
        assert!(output.contains("Please enter two numbers"));
        assert!(output.contains("must be in 0..2"));
    }

    #[test]
    fn test_invalid_utf8_reprompts() {
        let mut terminal = Terminal::new(Cursor::new(b"\xc3\x28 1\n3 1\n".to_vec()), Vec::new());
        let player = Player::new("Ada", Symbol::X);

        let coord = HumanInput
            .next_move(&Board::new(), &player, &mut terminal)
            .unwrap();
        assert_eq!(coord, Coord::new(2, 0));

        let output = String::from_utf8_lossy(terminal.output()).to_string();
        assert_eq!(output.matches("Ada's turn (X)").count(), 2);
        assert!(output.contains("is not a number"));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut terminal = Terminal::new(Cursor::new(""), Vec::new());
        let player = Player::new("Ada", Symbol::X);
        assert!(HumanInput
            .next_move(&Board::new(), &player, &mut terminal)
            .is_err());
    }
}
