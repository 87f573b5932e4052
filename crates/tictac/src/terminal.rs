//! Line-oriented console I/O.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Reader and writer pair used for prompting and printing.
///
/// Generic so tests can script input with a `Cursor` and capture output in
/// a `Vec<u8>`.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Creates a terminal on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal from any reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Prints `prompt` and reads one trimmed line.
    ///
    /// Returns `None` once input is exhausted. Bytes that are not UTF-8 are
    /// replaced with U+FFFD so the caller can reject the text and ask again.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_and_detects_end_of_input() {
        let mut term = Terminal::new(Cursor::new("  1 3 \n"), Vec::new());
        assert_eq!(term.ask("> ").unwrap(), Some("1 3".to_string()));
        assert_eq!(term.ask("> ").unwrap(), None);
        assert_eq!(String::from_utf8_lossy(term.output()), "> > ");
    }

    #[test]
    fn test_invalid_utf8_is_returned_as_text() {
        let mut term = Terminal::new(Cursor::new(b"\xff\xfe 2\n1 1\n".to_vec()), Vec::new());
        assert_eq!(term.ask("> ").unwrap(), Some("\u{fffd}\u{fffd} 2".to_string()));
        assert_eq!(term.ask("> ").unwrap(), Some("1 1".to_string()));
    }
}
