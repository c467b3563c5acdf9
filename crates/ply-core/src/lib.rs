//! Core board types: squares, piece codes, live pieces, and the occupancy board.

mod bitboard;
mod board;
mod color;
mod error;
mod file;
mod layout;
mod piece;
mod piece_code;
mod piece_kind;
mod rank;
mod square;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, LayoutError, SquareError};
pub use file::File;
pub use layout::{Placement, STARTING_LAYOUT};
pub use piece::{Piece, PieceId};
pub use piece_code::PieceCode;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
