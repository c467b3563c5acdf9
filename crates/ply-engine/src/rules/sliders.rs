//! Ray-cast movement for bishops, rooks, and queens.

use ply_core::{Bitboard, Board, Piece, Square};

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Step from `piece` along each direction until leaving the board or reaching
/// an occupied square. An enemy square ends the ray and is included; a friendly
/// square ends the ray and is excluded.
fn ray_cast(piece: &Piece, board: &Board, directions: &[(i8, i8)]) -> Bitboard {
    let mut range = Bitboard::EMPTY;
    for &(df, dr) in directions {
        let mut cursor: Option<Square> = piece.square().offset(df, dr);
        while let Some(sq) = cursor {
            match board.color_on(sq) {
                None => range = range.with(sq),
                Some(color) => {
                    if color != piece.color() {
                        range = range.with(sq);
                    }
                    break;
                }
            }
            cursor = sq.offset(df, dr);
        }
    }
    range
}

pub fn rook_range(piece: &Piece, board: &Board) -> Bitboard {
    ray_cast(piece, board, &ORTHOGONAL)
}

pub fn bishop_range(piece: &Piece, board: &Board) -> Bitboard {
    ray_cast(piece, board, &DIAGONAL)
}

pub fn queen_range(piece: &Piece, board: &Board) -> Bitboard {
    ray_cast(piece, board, &ORTHOGONAL) | ray_cast(piece, board, &DIAGONAL)
}
