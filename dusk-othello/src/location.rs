//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::{self, Bitboard};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use itertools::Itertools;
use std::fmt::{self, Formatter, Write};

/// A single cell of the Othello board, stored as a one-hot [`Bitboard`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A set of locations on the Othello board, which can be iterated to retrieve them.
/// Iteration yields the lowest square (closest to H8) first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a square index: 0 for H8, 63 for A1.
    #[inline]
    pub fn from_square(square: u8) -> Self {
        debug_assert!((square as usize) < NUM_SPACES);
        Self(Bitboard::from_square(square))
    }

    /// Convert into a square index: 0 for H8, 63 for A1.
    #[inline]
    pub fn to_square(self) -> u8 {
        self.0 .0.trailing_zeros() as u8
    }

    /// Convert from a row-major cell index: 0 for A1, 63 for H8.
    /// Returns `None` if the index is off the board.
    #[inline]
    pub fn from_cell(cell: usize) -> Option<Self> {
        if cell < NUM_SPACES {
            Some(Self(Bitboard::from_cell(cell)))
        } else {
            None
        }
    }

    /// Convert into a row-major cell index: 0 for A1, 63 for H8.
    #[inline]
    pub fn to_cell(self) -> usize {
        bitboard::square_to_cell(self.to_square())
    }

    /// Convert from zero-based row and column coordinates, row 0 being the top.
    /// Returns `None` if the coordinates are off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return None;
        }
        Self::from_cell(row * EDGE_LENGTH + col)
    }

    /// Get the zero-based `(row, col)` coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let cell = self.to_cell();
        (cell / EDGE_LENGTH, cell % EDGE_LENGTH)
    }
}

/// Convert this [`Location`] into string notation ("A4": column letter, then row number).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        f.write_char((b'A' + col as u8) as char)?;
        f.write_char((b'1' + row as u8) as char)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4", case-insensitive).
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        !(loc.0 & self.0).is_empty()
    }

    /// The underlying mask of all listed locations.
    #[inline]
    pub fn bitboard(self) -> Bitboard {
        self.0
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    #[inline]
    fn next(&mut self) -> Option<Location> {
        let square = self.0.first_square()?;
        self.0 = self.0.without_lowest();
        Some(Location::from_square(square))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}
