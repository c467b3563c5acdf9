//! Pawn movement: non-capturing advances and diagonal captures.

use ply_core::{Bitboard, Board, Piece};

/// Forward squares the pawn may step to without capturing.
///
/// One step if that square is empty; two steps if the pawn has never moved
/// and both squares ahead are empty.
pub fn advance_range(piece: &Piece, board: &Board) -> Bitboard {
    let forward = piece.color().forward();
    let mut range = Bitboard::EMPTY;
    let Some(one) = piece.square().offset(0, forward) else {
        return range;
    };
    if board.is_occupied(one) {
        return range;
    }
    range = range.with(one);
    if !piece.has_moved()
        && let Some(two) = piece.square().offset(0, 2 * forward)
        && !board.is_occupied(two)
    {
        range = range.with(two);
    }
    range
}

/// Forward-diagonal squares held by the opposing side.
pub fn capture_range(piece: &Piece, board: &Board) -> Bitboard {
    let forward = piece.color().forward();
    let enemy = !piece.color();
    [-1, 1]
        .into_iter()
        .filter_map(|df| piece.square().offset(df, forward))
        .filter(|&sq| board.color_on(sq) == Some(enemy))
        .collect()
}

pub fn pawn_range(piece: &Piece, board: &Board) -> Bitboard {
    advance_range(piece, board) | capture_range(piece, board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ply_core::Square;

    #[test]
    fn unmoved_pawn_single_and_double_step() {
        let board = Board::starting_position();
        let pawn = board.piece_at(Square::E2).unwrap();
        assert_eq!(
            advance_range(pawn, &board),
            Bitboard::EMPTY.with(Square::E3).with(Square::E4)
        );
        let black = board.piece_at(Square::D7).unwrap();
        assert_eq!(
            advance_range(black, &board),
            Bitboard::EMPTY.with(Square::D6).with(Square::D5)
        );
    }

    #[test]
    fn moved_pawn_back_on_home_rank_steps_once() {
        let mut board = Board::from_layout(["wP:e2"]).unwrap();
        let mut pawn = board.remove(Square::E2).unwrap();
        pawn.record_move();
        board.place(pawn, Square::E2);
        let pawn = board.piece_at(Square::E2).unwrap();
        assert!(pawn.has_moved());
        assert_eq!(advance_range(pawn, &board), Bitboard::EMPTY.with(Square::E3));
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = Board::from_layout(["wP:e2", "bN:e3"]).unwrap();
        let pawn = board.piece_at(Square::E2).unwrap();
        assert!(advance_range(pawn, &board).is_empty());

        let board = Board::from_layout(["wP:e2", "bN:e4"]).unwrap();
        let pawn = board.piece_at(Square::E2).unwrap();
        assert_eq!(advance_range(pawn, &board), Bitboard::EMPTY.with(Square::E3));
    }

    #[test]
    fn captures_only_enemies_on_diagonals() {
        let board = Board::from_layout(["wP:e4", "bP:d5", "wN:f5", "bP:e5"]).unwrap();
        let pawn = board.piece_at(Square::E4).unwrap();
        assert_eq!(capture_range(pawn, &board), Bitboard::EMPTY.with(Square::D5));
        // Blocked straight ahead by e5, so the full range is the single capture.
        assert_eq!(pawn_range(pawn, &board), Bitboard::EMPTY.with(Square::D5));
    }

    #[test]
    fn edge_file_pawn_has_one_diagonal() {
        let board = Board::from_layout(["bP:a7", "wR:b6", "wR:h6"]).unwrap();
        let pawn = board.piece_at(Square::A7).unwrap();
        assert_eq!(capture_range(pawn, &board), Bitboard::EMPTY.with(Square::B6));
    }

    #[test]
    fn pawn_on_last_rank_has_no_moves() {
        let board = Board::from_layout(["wP:c8"]).unwrap();
        let pawn = board.piece_at(Square::C8).unwrap();
        assert!(pawn_range(pawn, &board).is_empty());
    }
}
