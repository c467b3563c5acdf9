//! Error types for coordinate parsing, layout parsing, and board validation.

use crate::piece::PieceId;
use crate::square::Square;

/// A string that is not a square coordinate (`a1`..`h8`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: \"{found}\"")]
pub struct SquareError {
    /// The rejected input.
    pub found: String,
}

/// Errors that occur when parsing a layout entry such as `"wP:e4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The entry has no `:` between the piece code and the square.
    #[error("layout entry \"{entry}\" is missing the ':' separator")]
    MissingSeparator {
        /// The offending entry.
        entry: String,
    },
    /// The piece code is not a color letter followed by a kind letter.
    #[error("invalid piece code: \"{found}\"")]
    InvalidPieceCode {
        /// The invalid code.
        found: String,
    },
    /// The square part of the entry is not a coordinate.
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),
    /// Two entries name the same square.
    #[error("square {square} is listed more than once")]
    DuplicateSquare {
        /// The contested square.
        square: Square,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A piece records a different square than the one it is stored under.
    #[error("piece {id} is stored on {stored} but records {recorded}")]
    LocationMismatch {
        /// The inconsistent piece.
        id: PieceId,
        /// The key it is stored under.
        stored: Square,
        /// The square it believes it stands on.
        recorded: Square,
    },
    /// Two squares hold pieces with the same id.
    #[error("piece id {id} appears on more than one square")]
    DuplicateId {
        /// The repeated id.
        id: PieceId,
    },
}
