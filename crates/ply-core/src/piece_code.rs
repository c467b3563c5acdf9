//! Colored piece codes such as `wP` or `bK`, bit-packed into a single byte.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::LayoutError;
use crate::piece_kind::PieceKind;

/// A color plus a kind, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Color`] (0 = White, 1 = Black)
///
/// Displays as the two-character code used on the wire: color letter then
/// kind letter (`wP`, `bQ`, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceCode(u8);

impl PieceCode {
    /// Create a code from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> PieceCode {
        PieceCode((color as u8) << 3 | (kind as u8))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind::ALL[(self.0 & 0x07) as usize]
    }

    /// Return the color (bit 3).
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 3 {
            0 => Color::White,
            _ => Color::Black,
        }
    }
}

impl FromStr for PieceCode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<PieceCode, LayoutError> {
        let invalid = || LayoutError::InvalidPieceCode {
            found: s.to_string(),
        };
        let mut chars = s.chars();
        let color = chars.next().and_then(Color::from_code).ok_or_else(invalid)?;
        let kind = chars.next().and_then(PieceKind::from_code).ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(PieceCode::new(kind, color))
    }
}

impl fmt::Display for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color().code(), self.kind().code())
    }
}

impl fmt::Debug for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceCode({self})")
    }
}
