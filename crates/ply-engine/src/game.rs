//! The game engine: owns the board and both players, and turns move commands
//! into applied plies.

use tracing::{debug, info};

use ply_core::{Bitboard, Board, Color, LayoutError, Square};

use crate::apply::{AppliedMove, perform_legal_move};
use crate::command::MoveCommand;
use crate::error::CommandError;
use crate::player::Player;
use crate::rules::movement_range;

/// Authoritative state of one game.
///
/// Commands are processed one at a time and either apply completely or leave
/// every part of the state unchanged.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: [Player; Color::COUNT],
    to_move: Color,
    turn: u32,
}

impl GameEngine {
    /// Start a game from the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::starting_position())
    }

    /// Start a game from custom layout entries such as `"wP:e4"`.
    pub fn with_layout<I, S>(entries: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_board(Board::from_layout(entries)?))
    }

    fn from_board(board: Board) -> Self {
        info!(pieces = board.len(), "new game");
        let players = Color::ALL.map(|color| Player::from_board(color, &board));
        Self {
            board,
            players,
            to_move: Color::White,
            turn: 1,
        }
    }

    /// Interpret a `"<from> <to>"` command for the side on move.
    ///
    /// On success the turn counter advances by one and the other side is on
    /// move. On failure nothing changes and the error names the reason.
    pub fn interpret_command(&mut self, command: &str) -> Result<AppliedMove, CommandError> {
        let result = self.apply_command(command);
        match &result {
            Ok(applied) => debug!(
                %applied,
                turn = self.turn,
                to_move = %self.to_move,
                "command accepted"
            ),
            Err(error) => debug!(command, %error, turn = self.turn, "command rejected"),
        }
        result
    }

    fn apply_command(&mut self, command: &str) -> Result<AppliedMove, CommandError> {
        let MoveCommand { from, to } = command.parse()?;

        let piece = *self
            .board
            .piece_at(from)
            .ok_or(CommandError::NoPieceAtSource { square: from })?;

        if piece.color() != self.to_move {
            return Err(CommandError::WrongTurn {
                square: from,
                piece: piece.code(),
                to_move: self.to_move,
            });
        }
        if from == to {
            return Err(CommandError::NoOpMove { square: from });
        }
        if self.board.color_on(to) == Some(piece.color()) {
            return Err(CommandError::SelfCapture {
                piece: piece.code(),
                from,
                to,
            });
        }

        let applied = perform_legal_move(&mut self.board, from, to).ok_or(
            CommandError::IllegalDestination {
                piece: piece.code(),
                from,
                to,
            },
        )?;

        if let Some(captured) = applied.captured {
            self.players[captured.color().index()].remove(captured.id());
        }
        self.turn += 1;
        self.to_move = !self.to_move;
        Ok(applied)
    }

    /// One `"<pieceCode>:<square>"` token per piece on the board, in square
    /// order (a1, b1, ..., h8).
    pub fn game_state(&self) -> Vec<String> {
        self.board.pieces().map(ToString::to_string).collect()
    }

    /// The side on move.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.to_move
    }

    /// Turn counter: 1 at the start, plus one per applied ply.
    #[inline]
    pub fn current_turn(&self) -> u32 {
        self.turn
    }

    /// Movement range of whatever stands on `sq`, regardless of whose turn it is.
    pub fn movement_range_at(&self, sq: Square) -> Option<Bitboard> {
        self.board
            .piece_at(sq)
            .map(|piece| movement_range(piece, &self.board))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
