//! Command rejection reasons.

use ply_core::{Color, PieceCode, Square};

/// Why a move command was rejected. Every variant leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The command is not two coordinates separated by a single space.
    #[error("malformed command \"{command}\": expected \"<from> <to>\"")]
    Malformed {
        /// The raw command text.
        command: String,
    },

    /// The source square is empty.
    #[error("no piece on {square}")]
    NoPieceAtSource {
        /// The empty source square.
        square: Square,
    },

    /// The piece on the source square belongs to the side not on move.
    #[error("{piece} on {square} cannot move: it is {to_move}'s turn")]
    WrongTurn {
        /// The source square.
        square: Square,
        /// The piece standing there.
        piece: PieceCode,
        /// The side on move.
        to_move: Color,
    },

    /// Source and destination are the same square.
    #[error("{square} to {square} is not a move")]
    NoOpMove {
        /// The repeated square.
        square: Square,
    },

    /// The destination holds a piece of the mover's own color.
    #[error("{piece} on {from} cannot capture its own side on {to}")]
    SelfCapture {
        /// The moving piece.
        piece: PieceCode,
        /// The source square.
        from: Square,
        /// The friendly-occupied destination.
        to: Square,
    },

    /// The destination is outside the moving piece's movement range.
    #[error("{piece} cannot move from {from} to {to}")]
    IllegalDestination {
        /// The moving piece.
        piece: PieceCode,
        /// The source square.
        from: Square,
        /// The rejected destination.
        to: Square,
    },
}
