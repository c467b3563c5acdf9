//! Fixed-offset movement for kings and knights.

use ply_core::{Bitboard, Board, Piece};

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2),  (1, 2),  (2, -1),  (2, 1),
];

fn leaps(piece: &Piece, deltas: &[(i8, i8)]) -> Bitboard {
    let from = piece.square();
    deltas
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .collect()
}

// Occupancy is handled by the caller's friendly mask; any on-board square counts here.
pub fn king_range(piece: &Piece, _board: &Board) -> Bitboard {
    leaps(piece, &KING_DELTAS)
}

pub fn knight_range(piece: &Piece, _board: &Board) -> Bitboard {
    leaps(piece, &KNIGHT_DELTAS)
}
