//! Players: a color plus the roster of pieces it still has on the board.

use ply_core::{Board, Color, PieceId};

/// One side of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    roster: Vec<PieceId>,
}

impl Player {
    /// Build the player for `color` from the pieces of that color on `board`.
    pub fn from_board(color: Color, board: &Board) -> Player {
        let roster = board
            .pieces()
            .filter(|piece| piece.color() == color)
            .map(|piece| piece.id())
            .collect();
        Player { color, roster }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Ids of the pieces this player still has on the board.
    #[inline]
    pub fn roster(&self) -> &[PieceId] {
        &self.roster
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.roster.len()
    }

    #[inline]
    pub fn owns(&self, id: PieceId) -> bool {
        self.roster.contains(&id)
    }

    /// Drop a captured piece from the roster. Returns `false` if it was not listed.
    pub(crate) fn remove(&mut self, id: PieceId) -> bool {
        let before = self.roster.len();
        self.roster.retain(|&owned| owned != id);
        self.roster.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::Player;
    use ply_core::{Board, Color, Square};

    #[test]
    fn rosters_split_by_color() {
        let board = Board::starting_position();
        let white = Player::from_board(Color::White, &board);
        let black = Player::from_board(Color::Black, &board);
        assert_eq!(white.piece_count(), 16);
        assert_eq!(black.piece_count(), 16);
        let e1 = board.piece_at(Square::E1).unwrap().id();
        assert!(white.owns(e1));
        assert!(!black.owns(e1));
    }

    #[test]
    fn remove_prunes_once() {
        let board = Board::from_layout(["wK:e1", "wP:e2"]).unwrap();
        let mut white = Player::from_board(Color::White, &board);
        let pawn = board.piece_at(Square::E2).unwrap().id();
        assert!(white.remove(pawn));
        assert!(!white.remove(pawn));
        assert_eq!(white.piece_count(), 1);
        assert!(!white.owns(pawn));
    }
}
