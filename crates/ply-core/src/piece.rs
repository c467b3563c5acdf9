//! Live pieces: a piece code plus the mutable per-piece state.

use std::fmt;

use crate::color::Color;
use crate::piece_code::PieceCode;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Stable identity of a piece for the lifetime of a game.
///
/// Ids are handed out in layout order when a board is seeded and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub u16);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One physical piece on the board.
///
/// The same value travels from square to square as it moves, so its id and
/// move count persist across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    code: PieceCode,
    square: Square,
    move_count: u32,
}

impl Piece {
    /// Create an unmoved piece standing on `square`.
    pub const fn new(id: PieceId, code: PieceCode, square: Square) -> Piece {
        Piece {
            id,
            code,
            square,
            move_count: 0,
        }
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn code(&self) -> PieceCode {
        self.code
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.code.color()
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.code.kind()
    }

    /// The square the piece currently stands on.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Number of successful relocations so far.
    #[inline]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Count one more successful relocation. The square itself is updated
    /// by [`Board::place`](crate::Board::place).
    #[inline]
    pub fn record_move(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn set_square(&mut self, sq: Square) {
        self.square = sq;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.code, self.square)
    }
}
