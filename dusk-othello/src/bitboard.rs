//! Low-level bitboard operations.
//!
//! A [`Bitboard`] holds one bit per board cell. By convention the MSB is the
//! upper-left cell (A1) and cells follow row-major order, so the *cell index*
//! `i` (A1 = 0, H8 = 63) lives at bit position `63 - i`. That bit position is
//! called the *square index* (H8 = 0, A1 = 63) and is what bit-scanning yields.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(pub(crate) u64);

/// Starting bitboard for Black.
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White.
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

/// Convert a row-major cell index (A1 = 0) into a square index (H8 = 0).
#[inline]
pub const fn cell_to_square(cell: usize) -> u8 {
    (NUM_SPACES - 1 - cell) as u8
}

/// Convert a square index (H8 = 0) into a row-major cell index (A1 = 0).
#[inline]
pub const fn square_to_cell(square: u8) -> usize {
    NUM_SPACES - 1 - square as usize
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    /// The bitboard with no locations set.
    pub const EMPTY: Self = Self(0);

    /// The bitboard with every location set.
    pub const FULL: Self = Self(u64::MAX);

    /// Wrap raw bits. Usable in `const` contexts, unlike `From<u64>`.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// A bitboard with only the given square set.
    #[inline]
    pub const fn from_square(square: u8) -> Self {
        Self(1 << square)
    }

    /// A bitboard with only the given row-major cell set.
    #[inline]
    pub const fn from_cell(cell: usize) -> Self {
        Self::from_square(cell_to_square(cell))
    }

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if the given square is set.
    #[inline]
    pub fn has_square(self, square: u8) -> bool {
        (self.0 >> square) & 1 != 0
    }

    /// Return true if the given row-major cell is set.
    #[inline]
    pub fn has_cell(self, cell: usize) -> bool {
        self.has_square(cell_to_square(cell))
    }

    /// The lowest set square, or `None` for an empty bitboard.
    #[inline]
    pub fn first_square(self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as u8)
        }
    }

    /// Clear the lowest set bit.
    #[inline]
    pub fn without_lowest(self) -> Self {
        Self(self.0 & self.0.wrapping_sub(1))
    }

    /// Shift toward higher squares for positive `amount`, lower squares for negative.
    /// Bits shifted off either end are lost; no column masking is applied.
    #[inline]
    pub fn shift(self, amount: i32) -> Self {
        if amount >= 0 {
            Self(self.0 << amount)
        } else {
            Self(self.0 >> -amount)
        }
    }

    /// Split the bits in this bitboard into an array, in row-major cell order.
    #[inline]
    pub fn unpack(self) -> [bool; NUM_SPACES] {
        let mut cells = [false; NUM_SPACES];
        for (cell, bit) in cells.iter_mut().zip(self) {
            *cell = bit;
        }
        cells
    }
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.bitboard.has_square(self.remaining as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_square_conversions() {
        assert_eq!(cell_to_square(0), 63);
        assert_eq!(cell_to_square(63), 0);
        assert_eq!(square_to_cell(0), 63);
        for cell in 0..NUM_SPACES {
            assert_eq!(square_to_cell(cell_to_square(cell)), cell);
        }
    }

    #[test]
    fn start_positions_are_disjoint() {
        assert!((BLACK_START & WHITE_START).is_empty());
        assert_eq!(BLACK_START.count_occupied(), 2);
        assert_eq!(WHITE_START.count_occupied(), 2);
        assert_eq!((BLACK_START | WHITE_START).count_empty(), 60);
    }

    #[test]
    fn lowest_bit_helpers() {
        let bitboard = Bitboard(0b1011_0000);
        assert_eq!(bitboard.without_lowest(), Bitboard(0b1010_0000));
        assert_eq!(bitboard.first_square(), Some(4));
        assert_eq!(Bitboard::EMPTY.first_square(), None);
    }

    #[test]
    fn shift_both_directions() {
        let bitboard = Bitboard::from_square(10);
        assert_eq!(bitboard.shift(8), Bitboard::from_square(18));
        assert_eq!(bitboard.shift(-9), Bitboard::from_square(1));
        assert_eq!(bitboard.shift(0), bitboard);
        assert!(Bitboard::from_square(63).shift(1).is_empty());
    }

    #[test]
    fn unpack_is_row_major() {
        let cells = (Bitboard::from_cell(0) | Bitboard::from_cell(9)).unpack();
        assert!(cells[0]);
        assert!(cells[9]);
        assert_eq!(cells.iter().filter(|&&bit| bit).count(), 2);
        assert!(Bitboard::from_cell(9).has_cell(9));
    }

    #[test]
    fn display_grid() {
        let expected = "   A B C D E F G H\n \
                        1 # . . . . . . . \n \
                        2 . . . . . . . . \n \
                        3 . . . . . . . . \n \
                        4 . . . . . . . . \n \
                        5 . . . . . . . . \n \
                        6 . . . . . . . . \n \
                        7 . . . . . . . . \n \
                        8 . . . . . . . # ";
        assert_eq!(Bitboard(0x8000000000000001).to_string(), expected);
    }
}
