//! Line-oriented session loop: one command per line in, one response out.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use ply_engine::GameEngine;

use crate::command::{Command, SessionOption, parse_command};
use crate::error::CliError;

/// Knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Print the board grid after each accepted move.
    pub show_board: bool,
}

/// A text session driving one [`GameEngine`].
///
/// Responses:
/// - accepted move, `new`, `position`: `ok <turn> <player>`
/// - any rejection or parse failure: `error <message>`
/// - `state`: space-separated location codes
/// - `turn`, `player`: the bare value
/// - `range`: space-separated squares (empty line when the piece is stuck)
pub struct Session {
    game: GameEngine,
    config: SessionConfig,
}

impl Session {
    /// Create a session on the standard starting position.
    pub fn new() -> Self {
        Self::with_game(GameEngine::new())
    }

    /// Create a session around an existing game.
    pub fn with_game(game: GameEngine) -> Self {
        Self {
            game,
            config: SessionConfig::default(),
        }
    }

    /// The game being driven.
    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// responses to `out`.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line is
    /// answered with an error instead of ending the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<(), CliError> {
        info!("session started");
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error {e}")?;
                }
            }
            out.flush()?;
        }
        info!(turn = self.game.current_turn(), "session closed");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), CliError> {
        match cmd {
            Command::Move(text) => match self.game.interpret_command(&text) {
                Ok(_) => {
                    self.write_status(out)?;
                    if self.config.show_board {
                        writeln!(out, "{}", self.game.board().pretty())?;
                    }
                }
                Err(e) => writeln!(out, "error {e}")?,
            },
            Command::NewGame => {
                self.game = GameEngine::new();
                self.write_status(out)?;
            }
            Command::Position(game) => {
                self.game = *game;
                self.write_status(out)?;
            }
            Command::State => writeln!(out, "{}", self.game.game_state().join(" "))?,
            Command::Turn => writeln!(out, "{}", self.game.current_turn())?,
            Command::Player => writeln!(out, "{}", self.game.current_player())?,
            Command::Board => writeln!(out, "{}", self.game.board().pretty())?,
            Command::Range(square) => match self.game.movement_range_at(square) {
                Some(range) => {
                    let squares: Vec<String> = range.map(|sq| sq.to_string()).collect();
                    writeln!(out, "{}", squares.join(" "))?;
                }
                None => writeln!(out, "error no piece on {square}")?,
            },
            Command::SetOption(SessionOption::ShowBoard(on)) => {
                self.config.show_board = on;
                writeln!(out, "ok")?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn write_status<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        writeln!(
            out,
            "ok {} {}",
            self.game.current_turn(),
            self.game.current_player()
        )?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Session, String) {
        let mut session = Session::new();
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepted_and_rejected_moves() {
        let (session, out) = run("e2 e4\nd2 d4\ne7 e5\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ok 2 b");
        assert!(lines[1].starts_with("error "), "got {:?}", lines[1]);
        assert_eq!(lines[2], "ok 3 w");
        assert_eq!(session.game().current_turn(), 3);
    }

    #[test]
    fn queries() {
        let (_, out) = run("turn\nplayer\nrange b1\nrange e4\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["1", "w", "a3 c3", "error no piece on e4"]);
    }

    #[test]
    fn position_then_state() {
        let (_, out) = run("position wK:e1 bK:e8\nstate\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["ok 1 w", "wK:e1 bK:e8"]);
    }

    #[test]
    fn quit_stops_reading() {
        let (session, out) = run("e2 e4\nquit\nd7 d5\n");
        assert_eq!(out.lines().count(), 1);
        assert_eq!(session.game().current_turn(), 2);
    }

    #[test]
    fn show_board_after_moves() {
        let (_, out) = run("set board on\ne2 e4\n");
        assert!(out.starts_with("ok\nok 2 b\n"));
        assert!(out.contains("4  . . . . P . . ."));
    }

    #[test]
    fn invalid_utf8_line_is_rejected_and_session_continues() {
        let mut session = Session::new();
        let mut out = Vec::new();
        session.run(&b"\xff\xfe e4\ne2 e4\n"[..], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("error malformed command"), "got {:?}", lines[0]);
        assert_eq!(lines[1], "ok 2 b");
        assert_eq!(session.game().current_turn(), 2);
    }

    #[test]
    fn parse_errors_are_reported_and_session_continues() {
        let (session, out) = run("position\nnew\n");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("error malformed position"));
        assert_eq!(lines[1], "ok 1 w");
        assert_eq!(session.game().current_turn(), 1);
    }
}
