//! Parsing of interactive prompt input.

use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

/// Keyword that leaves the program from either prompt.
const EXIT: &str = "exit";

/// Keyword that returns from the site menu to the state prompt.
const BACK: &str = "back";

/// Input at the state prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateCommand {
    Exit,
    /// A state name, trimmed and lowercased.
    State(String),
}

/// Input at the site menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Back,
    Exit,
    /// Zero-based index into the listed sites.
    Select(usize),
}

/// Site menu input that is neither a keyword nor a listed index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("not a number: '{0}'")]
    NotNumeric(String),

    #[error("{index} is not between 1 and {len}")]
    OutOfRange { index: i64, len: usize },
}

pub fn parse_state_command(line: &str) -> StateCommand {
    let input = line.trim().to_lowercase();
    if input == EXIT { StateCommand::Exit } else { StateCommand::State(input) }
}

/// Parse a site menu choice against a listing of `len` sites.
///
/// Keywords are case-insensitive. Numbers are one-based as displayed.
pub fn parse_menu_command(line: &str, len: usize) -> Result<MenuCommand, MenuError> {
    let input = line.trim();

    if input.eq_ignore_ascii_case(EXIT) {
        return Ok(MenuCommand::Exit);
    }
    if input.eq_ignore_ascii_case(BACK) {
        return Ok(MenuCommand::Back);
    }

    // Integers too large for i64 are still numbers, just out of range.
    let index = input.parse::<i64>().or_else(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(MenuError::NotNumeric(input.to_string())),
    })?;
    match usize::try_from(index) {
        Ok(n) if (1..=len).contains(&n) => Ok(MenuCommand::Select(n - 1)),
        _ => Err(MenuError::OutOfRange { index, len }),
    }
}
