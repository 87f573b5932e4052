//! Parsing of typed console input.

use tictac_core::{Board, Coord};
use tracing::instrument;

/// Malformed move text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Not exactly two values were given.
    #[display("Please enter two numbers (row col).")]
    WrongArity,

    /// A value was not an integer.
    #[display("'{}' is not a number.", _0)]
    NotANumber(String),

    /// Values fit neither the 0..2 nor the 1..3 convention.
    #[display("Row/Col must be in 0..2 (or 1..3).")]
    OutOfRange,
}

impl std::error::Error for InputError {}

/// Parses a move such as `"1 3"`, `"0,2"` or `"2, 2"` into zero-based coordinates.
///
/// When both numbers lie in `1..=3` they are read as one-based. Otherwise both
/// must lie in `0..=2`.
///
/// # Errors
///
/// Returns an [`InputError`] describing why the text was rejected.
#[instrument]
pub fn parse_move(raw: &str) -> Result<Coord, InputError> {
    let normalized = raw.replace(',', " ");
    let parts: Vec<&str> = normalized.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::WrongArity);
    };

    let number = |s: &str| {
        s.parse::<i64>()
            .map_err(|_| InputError::NotANumber(s.to_string()))
    };
    let (row, col) = (number(*row)?, number(*col)?);

    let size = Board::SIZE as i64;
    let one_based = |n: i64| (1..=size).contains(&n);
    let zero_based = |n: i64| (0..size).contains(&n);

    let (row, col) = if one_based(row) && one_based(col) {
        (row - 1, col - 1)
    } else if zero_based(row) && zero_based(col) {
        (row, col)
    } else {
        return Err(InputError::OutOfRange);
    };

    Ok(Coord::new(row as usize, col as usize))
}

/// Returns the trimmed name, or `fallback` when it is blank.
pub fn name_or_default(raw: &str, fallback: &str) -> String {
    match raw.trim() {
        "" => fallback.to_string(),
        name => name.to_string(),
    }
}

/// Returns true for `y` or `yes`, in any case.
pub fn wants_another_game(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "y" | "yes")
}
