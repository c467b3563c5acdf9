//! Move command parsing: `"<from> <to>"`, e.g. `"e2 e4"`.

use std::fmt;
use std::str::FromStr;

use ply_core::Square;

use crate::error::CommandError;

/// A parsed request to move whatever stands on `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub from: Square,
    pub to: Square,
}

impl FromStr for MoveCommand {
    type Err = CommandError;

    /// Exactly two coordinates separated by a single space. Leading, trailing,
    /// or doubled whitespace is rejected.
    fn from_str(command: &str) -> Result<MoveCommand, CommandError> {
        let malformed = || CommandError::Malformed {
            command: command.to_string(),
        };
        let (from, to) = command.split_once(' ').ok_or_else(malformed)?;
        let from = Square::from_algebraic(from).ok_or_else(malformed)?;
        let to = Square::from_algebraic(to).ok_or_else(malformed)?;
        Ok(MoveCommand { from, to })
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}
