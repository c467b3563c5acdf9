//! Move legality and application for a single piece.

use std::fmt;

use ply_core::{Board, Piece, PieceCode, PieceId, PieceKind, Square};

use crate::rules::{advance_range, can_move_to, capture_range};

/// Record of a ply that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// Id of the piece that moved.
    pub id: PieceId,
    /// Code of the piece that moved.
    pub code: PieceCode,
    pub from: Square,
    pub to: Square,
    /// The opposing piece removed from `to`, if the move was a capture.
    pub captured: Option<Piece>,
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.code, self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.code())?;
        }
        Ok(())
    }
}

/// Return `true` if `piece` may legally move from its current square to `to`.
///
/// Pawns branch on the destination: an empty square must be an advance, an
/// occupied square must be a diagonal capture.
pub fn is_legal(piece: &Piece, board: &Board, to: Square) -> bool {
    match piece.kind() {
        PieceKind::Pawn if board.is_occupied(to) => capture_range(piece, board).contains(to),
        PieceKind::Pawn => advance_range(piece, board).contains(to),
        _ => can_move_to(piece, board, to),
    }
}

/// Move the piece on `from` to `to` if the move is legal for it.
///
/// On success any opposing piece on `to` is removed first, then the mover is
/// relocated and its move count incremented. Returns `None` and leaves the
/// board untouched when `from` is empty or the move is illegal.
pub fn perform_legal_move(board: &mut Board, from: Square, to: Square) -> Option<AppliedMove> {
    let piece = *board.piece_at(from)?;
    if !is_legal(&piece, board, to) {
        return None;
    }

    let mut moving = board.remove(from)?;
    let captured = board.remove(to);
    moving.record_move();
    board.place(moving, to);

    Some(AppliedMove {
        id: piece.id(),
        code: piece.code(),
        from,
        to,
        captured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_move_relocates_and_counts() {
        let mut board = Board::starting_position();
        let applied = perform_legal_move(&mut board, Square::G1, Square::F3).unwrap();
        assert_eq!(applied.captured, None);
        assert!(!board.is_occupied(Square::G1));
        let knight = board.piece_at(Square::F3).unwrap();
        assert_eq!(knight.square(), Square::F3);
        assert_eq!(knight.move_count(), 1);
        assert_eq!(knight.id(), applied.id);
        board.validate().unwrap();
    }

    #[test]
    fn capture_removes_enemy() {
        let mut board = Board::from_layout(["wR:a1", "bN:a6"]).unwrap();
        let applied = perform_legal_move(&mut board, Square::A1, Square::A6).unwrap();
        let captured = applied.captured.unwrap();
        assert_eq!(captured.code().to_string(), "bN");
        assert_eq!(board.len(), 1);
        assert_eq!(applied.to_string(), "wR a1 a6 xbN");
    }

    #[test]
    fn illegal_move_leaves_board_untouched() {
        let mut board = Board::starting_position();
        let before = board.clone();
        assert!(perform_legal_move(&mut board, Square::E2, Square::E5).is_none());
        assert!(perform_legal_move(&mut board, Square::E4, Square::E5).is_none());
        assert!(perform_legal_move(&mut board, Square::A1, Square::A2).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn pawn_cannot_capture_straight_or_advance_diagonally() {
        let mut board = Board::from_layout(["wP:e4", "bP:e5"]).unwrap();
        assert!(perform_legal_move(&mut board, Square::E4, Square::E5).is_none());
        assert!(perform_legal_move(&mut board, Square::E4, Square::D5).is_none());
        assert!(perform_legal_move(&mut board, Square::E4, Square::F5).is_none());
    }

    #[test]
    fn pawn_double_step_only_once() {
        let mut board = Board::from_layout(["wP:e2"]).unwrap();
        assert!(perform_legal_move(&mut board, Square::E2, Square::E3).is_some());
        assert!(perform_legal_move(&mut board, Square::E3, Square::E5).is_none());
        assert!(perform_legal_move(&mut board, Square::E3, Square::E4).is_some());
    }
}
