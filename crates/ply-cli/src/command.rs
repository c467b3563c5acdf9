//! Session command parsing.

use ply_core::{STARTING_LAYOUT, Square};
use ply_engine::GameEngine;

use crate::error::CliError;

/// Options adjustable with `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `set board on|off` -- print the grid after each accepted move.
    ShowBoard(bool),
}

/// A parsed line of session input.
#[derive(Debug)]
pub enum Command {
    /// `<from> <to>` -- passed verbatim to the engine, which validates it.
    Move(String),
    /// `new` -- restart from the standard layout.
    NewGame,
    /// `position startpos | <entry> ...` -- restart from a layout.
    Position(Box<GameEngine>),
    /// `state` -- print the location code of every piece.
    State,
    /// `turn` -- print the turn counter.
    Turn,
    /// `player` -- print the side on move.
    Player,
    /// `board` -- print the grid.
    Board,
    /// `range <square>` -- print the movement range of the piece there.
    Range(Square),
    /// `set <name> <value>` -- change a session option.
    SetOption(SessionOption),
    /// `quit` -- end the session.
    Quit,
}

/// Parse a single line of input into a [`Command`].
///
/// Anything that does not start with a keyword is treated as a move and left
/// for the engine to accept or reject.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.first().copied() {
        Some("new") => Ok(Command::NewGame),
        Some("position") => parse_position(&tokens[1..]),
        Some("state") => Ok(Command::State),
        Some("turn") => Ok(Command::Turn),
        Some("player") => Ok(Command::Player),
        Some("board") => Ok(Command::Board),
        Some("range") => parse_range(&tokens[1..]),
        Some("set") => parse_set(&tokens[1..]),
        Some("quit") => Ok(Command::Quit),
        _ => Ok(Command::Move(line.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos`
/// - `position wK:e1 bK:e8 wP:e4 ...`
fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    let game = match tokens {
        [] => return Err(CliError::MalformedPosition),
        ["startpos"] => GameEngine::with_layout(STARTING_LAYOUT)?,
        entries => GameEngine::with_layout(entries)?,
    };
    Ok(Command::Position(Box::new(game)))
}

fn parse_range(tokens: &[&str]) -> Result<Command, CliError> {
    let value = tokens
        .first()
        .ok_or(CliError::MissingSquare { command: "range" })?;
    let square = Square::from_algebraic(value).ok_or_else(|| CliError::InvalidSquare {
        value: value.to_string(),
    })?;
    Ok(Command::Range(square))
}

fn parse_set(tokens: &[&str]) -> Result<Command, CliError> {
    let Some(&name) = tokens.first() else {
        return Err(CliError::UnknownOption { name: String::new() });
    };
    let value = tokens.get(1).copied().unwrap_or_default();
    match name {
        "board" => Ok(Command::SetOption(SessionOption::ShowBoard(parse_switch(name, value)?))),
        _ => Err(CliError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

fn parse_switch(name: &str, value: &str) -> Result<bool, CliError> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(CliError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
