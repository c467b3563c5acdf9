//! The board: the single authority on which piece occupies which square.

use std::fmt;

use tracing::debug;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::{BoardError, LayoutError};
use crate::layout::{Placement, STARTING_LAYOUT};
use crate::piece::{Piece, PieceId};
use crate::square::Square;

/// Square-to-piece mapping. At most one piece per square, by construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        match Board::from_layout(STARTING_LAYOUT) {
            Ok(board) => board,
            Err(err) => unreachable!("starting layout is valid: {err}"),
        }
    }

    /// Seed a board from layout entries such as `"wP:e4"`.
    ///
    /// Piece ids are assigned in entry order. A square listed twice is an
    /// error rather than a silent overwrite.
    pub fn from_layout<I, S>(entries: I) -> Result<Board, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut board = Board::empty();
        let mut next_id = 0u16;
        for entry in entries {
            let Placement { code, square } = entry.as_ref().parse::<Placement>()?;
            if board.is_occupied(square) {
                return Err(LayoutError::DuplicateSquare { square });
            }
            board.place(Piece::new(PieceId(next_id), code, square), square);
            next_id += 1;
        }
        debug!(pieces = next_id, "board seeded from layout");
        Ok(board)
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.squares[sq.index()].as_ref()
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Store `piece` under `sq`, recording `sq` as its location.
    ///
    /// Overwrites whatever was stored there; callers remove a live occupant
    /// first.
    pub fn place(&mut self, mut piece: Piece, sq: Square) {
        piece.set_square(sq);
        self.squares[sq.index()] = Some(piece);
    }

    /// Clear the given square, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Iterate over the pieces on the board in square order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten()
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    /// Return `true` if no piece is on the board.
    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }

    /// Return the squares occupied by the given side.
    pub fn side(&self, color: Color) -> Bitboard {
        self.pieces()
            .filter(|piece| piece.color() == color)
            .map(Piece::square)
            .collect()
    }

    /// Check that each piece records the square it is stored under and that
    /// no id appears twice.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen: Vec<PieceId> = Vec::with_capacity(32);
        for sq in Square::all() {
            let Some(piece) = self.piece_at(sq) else {
                continue;
            };
            if piece.square() != sq {
                return Err(BoardError::LocationMismatch {
                    id: piece.id(),
                    stored: sq,
                    recorded: piece.square(),
                });
            }
            if seen.contains(&piece.id()) {
                return Err(BoardError::DuplicateId { id: piece.id() });
            }
            seen.push(piece.id());
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pieces().map(ToString::to_string)).finish()
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0i8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0i8..8 {
                let c = Square::from_coords(file, rank)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or('.', |piece| match piece.color() {
                        Color::White => piece.kind().code(),
                        Color::Black => piece.kind().code().to_ascii_lowercase(),
                    });
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
