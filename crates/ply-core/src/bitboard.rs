//! A set of squares packed into a 64-bit integer, one bit per square.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::file::File;
use crate::rank::Rank;
use crate::square::Square;

/// A set of squares. Bit `n` is set when the square with index `n` is a member.
///
/// Movement ranges are returned as bitboards, so membership tests and unions
/// are single integer operations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Empty set.
    pub const EMPTY: Bitboard = Bitboard(0);

    const RANK_1_BITS: u64 = 0x0000_0000_0000_00FF;
    const FILE_A_BITS: u64 = 0x0101_0101_0101_0101;

    /// Return `true` if no squares are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count the number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if the given square is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Return a new bitboard with the given square added.
    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | (1u64 << sq.index()))
    }

    /// Return a new bitboard with the given square removed.
    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1u64 << sq.index()))
    }

    /// Return every square on the given rank.
    #[inline]
    pub const fn rank_mask(rank: Rank) -> Bitboard {
        Bitboard(Self::RANK_1_BITS << (rank.index() * 8))
    }

    /// Return every square on the given file.
    #[inline]
    pub const fn file_mask(file: File) -> Bitboard {
        Bitboard(Self::FILE_A_BITS << file.index())
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with)
    }
}

// Iterates members in index order (a1, b1, ..., h8).
impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = Square::from_index_unchecked(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            Some(sq)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for Bitboard {}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in (0..8).rev() {
            write!(f, "  {} ", rank + 1)?;
            for file in 0..8 {
                let mark = if (self.0 >> (rank * 8 + file)) & 1 == 1 { '1' } else { '.' };
                write!(f, "{mark} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Bitboard;
    use crate::file::File;
    use crate::rank::Rank;
    use crate::square::Square;

    #[test]
    fn with_contains_without() {
        let bb = Bitboard::EMPTY.with(Square::E4);
        assert!(bb.contains(Square::E4));
        assert!(!bb.contains(Square::D4));
        assert_eq!(bb.count(), 1);
        assert!(bb.without(Square::E4).is_empty());
    }

    #[test]
    fn masks_cover_eight_squares() {
        for rank in Rank::ALL {
            let mask = Bitboard::rank_mask(rank);
            assert_eq!(mask.count(), 8);
            assert!(File::ALL.into_iter().all(|file| mask.contains(Square::new(rank, file))));
        }
        for file in File::ALL {
            let mask = Bitboard::file_mask(file);
            assert_eq!(mask.count(), 8);
            assert!(Rank::ALL.into_iter().all(|rank| mask.contains(Square::new(rank, file))));
        }
    }

    #[test]
    fn iterates_in_index_order() {
        let bb: Bitboard = [Square::H8, Square::A1, Square::E4].into_iter().collect();
        assert_eq!(bb.len(), 3);
        assert_eq!(bb.collect::<Vec<_>>(), vec![Square::A1, Square::E4, Square::H8]);
    }

    #[test]
    fn set_operators() {
        let rank = Bitboard::rank_mask(Rank::Rank1);
        let file = Bitboard::file_mask(File::FileA);
        assert_eq!((rank & file).count(), 1);
        assert_eq!((rank | file).count(), 15);
        assert_eq!((!Bitboard::EMPTY).count(), 64);
    }
}
