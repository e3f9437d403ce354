//! The raw, perspective-relative Othello position.
//!
//! A [`Board`] stores only "the side to move" and "the other side". Every move
//! or pass swaps the two, so nothing here knows about colors; see
//! [`Game`](crate::Game) for the color-aware layer.
//!
//! Like [`bitboard`](crate::bitboard), these operations are unchecked: applying
//! a [`Flip`] computed for a different position silently corrupts the board.

use crate::bitboard::{Bitboard, BLACK_START, WHITE_START};
use crate::eval::{CellWeights, WEIGHT_SCALE};
use crate::location::{Location, LocationList};
use crate::{utils, EDGE_LENGTH, MAX_SCORE, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// Square-index shifts for the 8 ray directions, paired so that `SHIFTS[i]`
/// and `SHIFTS[i ^ 1]` point opposite ways: E/W, N/S, NE/SW, NW/SE.
const SHIFTS: [i32; 8] = [1, -1, 8, -8, 7, -7, 9, -9];

/// Cells an opponent disc may occupy while being bracketed along each direction
/// pair. Clips the edge columns (and rows) so shifts never wrap around the board.
const RAY_MASKS: [Bitboard; 4] = [
    Bitboard::new(0x7E7E7E7E7E7E7E7E),
    Bitboard::new(0x00FFFFFFFFFFFF00),
    Bitboard::new(0x007E7E7E7E7E7E00),
    Bitboard::new(0x007E7E7E7E7E7E00),
];

/// A pair of bitboards storing the complete position, relative to the side to move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// Discs of the side to move.
    pub mover: Bitboard,
    /// Discs of the side that just moved.
    pub other: Bitboard,
}

/// The effect of placing a disc: where it goes and which opponent discs it captures.
/// Only meaningful against the exact [`Board`] it was computed from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Flip {
    pub location: Location,
    pub flipped: Bitboard,
}

impl Default for Board {
    /// The standard opening, Black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening: four discs in the center, Black to move.
    #[inline]
    pub const fn new() -> Self {
        Self::from_bitboards(BLACK_START, WHITE_START)
    }

    /// Construct a position from the mover's and the other side's discs.
    /// The two masks must be disjoint.
    #[inline]
    pub const fn from_bitboards(mover: Bitboard, other: Bitboard) -> Self {
        Self { mover, other }
    }

    /// Return to the opening position.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get a mask of the legal moves for the side to move.
    ///
    /// Each direction floods outward from the mover's discs across contiguous
    /// opponent discs, then takes one more step; anything landing on an empty
    /// cell is a legal move.
    #[inline]
    pub fn legal_moves(self) -> LocationList {
        let mut candidates = Bitboard::EMPTY;
        for (i, &shift) in SHIFTS.iter().enumerate() {
            candidates |= self.legal_along(shift, RAY_MASKS[i / 2]);
        }
        LocationList::from(candidates & self.empty_mask())
    }

    /// Return true if the side to move has at least one legal move.
    #[inline]
    pub fn has_legal_move(self) -> bool {
        !self.legal_moves().bitboard().is_empty()
    }

    #[inline]
    fn legal_along(self, shift: i32, mask: Bitboard) -> Bitboard {
        let opponent = self.other & mask;
        let mut run = opponent & self.mover.shift(shift);

        // An opponent run between two discs is at most 6 long.
        for _ in 0..5 {
            run |= opponent & run.shift(shift);
        }

        run.shift(shift)
    }

    /// Compute the discs captured by placing at `loc`. Does not modify the board.
    /// An illegal location yields an empty flip mask.
    #[inline]
    pub fn compute_flip(self, loc: Location) -> Flip {
        let placed = Bitboard::from(loc);
        let mut flipped = Bitboard::EMPTY;
        for (i, &shift) in SHIFTS.iter().enumerate() {
            flipped |= self.flips_along(shift, RAY_MASKS[i / 2], placed);
        }

        Flip {
            location: loc,
            flipped,
        }
    }

    #[inline]
    fn flips_along(self, shift: i32, mask: Bitboard, placed: Bitboard) -> Bitboard {
        let opponent = self.other & mask;
        let mut run = placed.shift(shift) & opponent;

        for _ in 0..EDGE_LENGTH {
            let next = run.shift(shift);
            if !(next & self.mover).is_empty() {
                return run;
            }
            run |= next & opponent;
        }

        Bitboard::EMPTY
    }

    /// Apply a flip for the side to move, then hand the turn to the other side.
    #[inline]
    pub fn apply(&mut self, flip: Flip) {
        self.mover ^= flip.flipped;
        self.other ^= flip.flipped;
        self.mover ^= Bitboard::from(flip.location);
        self.pass();
    }

    /// Exactly revert an [`apply`](Self::apply) of the same flip.
    #[inline]
    pub fn undo(&mut self, flip: Flip) {
        self.pass();
        self.mover ^= Bitboard::from(flip.location);
        self.mover ^= flip.flipped;
        self.other ^= flip.flipped;
    }

    /// Compute and apply the move at `loc`, returning the flip needed to undo it.
    #[inline]
    pub fn play(&mut self, loc: Location) -> Flip {
        let flip = self.compute_flip(loc);
        self.apply(flip);
        flip
    }

    /// Hand the turn to the other side without placing a disc.
    #[inline]
    pub fn pass(&mut self) {
        std::mem::swap(&mut self.mover, &mut self.other);
    }

    /// Estimate the final disc differential with the standard cell weights.
    #[inline]
    pub fn evaluate(self) -> i32 {
        self.evaluate_with(&CellWeights::STANDARD)
    }

    /// Estimate the final disc differential for the side to move.
    /// Always within `[-MAX_SCORE, MAX_SCORE]`.
    #[inline]
    pub fn evaluate_with(self, weights: &CellWeights) -> i32 {
        let raw = weights.raw_score(self.mover, self.other);
        let rounded = raw.saturating_add(WEIGHT_SCALE / 2 * raw.signum());
        (rounded / WEIGHT_SCALE).clamp(-MAX_SCORE, MAX_SCORE)
    }

    /// Score a board as: # my pieces - # opponent pieces.
    #[inline]
    pub fn score_absolute_difference(self) -> i32 {
        self.mover_count() as i32 - self.other_count() as i32
    }

    /// Score a finished game for the side to move: disc differential, with
    /// every empty cell going to whichever side has more discs.
    #[inline]
    pub fn score(self) -> i32 {
        let difference = self.score_absolute_difference();
        let empties = self.count_empties() as i32;
        if difference > 0 {
            difference + empties
        } else if difference < 0 {
            difference - empties
        } else {
            0
        }
    }

    /// Number of discs owned by the side to move.
    #[inline]
    pub fn mover_count(self) -> u8 {
        self.mover.count_occupied()
    }

    /// Number of discs owned by the other side.
    #[inline]
    pub fn other_count(self) -> u8 {
        self.other.count_occupied()
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.mover | self.other
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empty_mask(self) -> Bitboard {
        !self.occupied_mask()
    }

    /// Count the empty spaces on the board.
    #[inline]
    pub fn count_empties(self) -> u8 {
        self.occupied_mask().count_empty()
    }
}

/// Draws the side to move as `#` and the other side as `O`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.mover
                .into_iter()
                .zip(self.other)
                .map(|pieces| match pieces {
                    (false, false) => '.',
                    (true, false) => '#',
                    (false, true) => 'O',
                    (true, true) => '!',
                }),
            f,
        )
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid board string")]
pub struct ParseBoardError;

/// Parse 64 cells in row-major order, A1 first: `X` (or `#`) for the side to
/// move, `O` for the other side and `-` (or `.`) for empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mover = Bitboard::EMPTY;
        let mut other = Bitboard::EMPTY;
        let mut cell = 0;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if cell >= NUM_SPACES {
                return Err(ParseBoardError);
            }
            match c {
                'X' | 'x' | '#' => mover |= Bitboard::from_cell(cell),
                'O' | 'o' => other |= Bitboard::from_cell(cell),
                '-' | '.' => {}
                _ => return Err(ParseBoardError),
            }
            cell += 1;
        }

        if cell != NUM_SPACES {
            return Err(ParseBoardError);
        }

        Ok(Self::from_bitboards(mover, other))
    }
}
