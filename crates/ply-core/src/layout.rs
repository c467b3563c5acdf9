//! Layout entries (`"<pieceCode>:<square>"`) and the standard starting layout.

use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;
use crate::piece_code::PieceCode;
use crate::square::Square;

/// The standard starting position, one entry per piece.
pub const STARTING_LAYOUT: [&str; 32] = [
    "bR:a8", "bN:b8", "bB:c8", "bQ:d8", "bK:e8", "bB:f8", "bN:g8", "bR:h8",
    "bP:a7", "bP:b7", "bP:c7", "bP:d7", "bP:e7", "bP:f7", "bP:g7", "bP:h7",
    "wP:a2", "wP:b2", "wP:c2", "wP:d2", "wP:e2", "wP:f2", "wP:g2", "wP:h2",
    "wR:a1", "wN:b1", "wB:c1", "wQ:d1", "wK:e1", "wB:f1", "wN:g1", "wR:h1",
];

/// One parsed layout entry: which piece stands on which square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub code: PieceCode,
    pub square: Square,
}

impl FromStr for Placement {
    type Err = LayoutError;

    fn from_str(entry: &str) -> Result<Placement, LayoutError> {
        let (code, square) = entry
            .split_once(':')
            .ok_or_else(|| LayoutError::MissingSeparator {
                entry: entry.to_string(),
            })?;
        Ok(Placement {
            code: code.parse()?,
            square: square.parse()?,
        })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.code, self.square)
    }
}
