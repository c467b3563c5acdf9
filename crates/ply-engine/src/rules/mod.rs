//! Movement rules for each piece kind.
//!
//! Every rule is a pure function of the piece and a borrowed board, reached
//! through a table indexed by [`PieceKind::index`]. Friendly-occupied squares
//! are stripped once in [`movement_range`], the same way for every kind.

mod leapers;
mod pawns;
mod sliders;

use ply_core::{Bitboard, Board, Piece, PieceKind, Square};

pub use leapers::{king_range, knight_range};
pub use pawns::{advance_range, capture_range, pawn_range};
pub use sliders::{bishop_range, queen_range, rook_range};

/// Signature shared by all per-kind range functions.
pub type RangeFn = fn(&Piece, &Board) -> Bitboard;

/// Range function for each kind, indexed by [`PieceKind::index`].
const RANGE_TABLE: [RangeFn; PieceKind::COUNT] = [
    pawn_range,
    knight_range,
    bishop_range,
    rook_range,
    queen_range,
    king_range,
];

/// Return the rule for the given kind.
#[inline]
pub fn range_fn(kind: PieceKind) -> RangeFn {
    RANGE_TABLE[kind.index()]
}

/// Squares `piece` could move to this ply, computed from the live board.
///
/// Never contains a square held by the piece's own side.
pub fn movement_range(piece: &Piece, board: &Board) -> Bitboard {
    range_fn(piece.kind())(piece, board) & !board.side(piece.color())
}

/// Return `true` if `target` is in the piece's movement range.
#[inline]
pub fn can_move_to(piece: &Piece, board: &Board, target: Square) -> bool {
    movement_range(piece, board).contains(target)
}
