//! Static positional evaluation by weighted cell classes.

use crate::bitboard::Bitboard;

/// Number of cell classes the board is partitioned into.
pub const NUM_CELL_CLASSES: usize = 10;

/// Weights were fit against final disc differentials scaled by this factor.
pub const WEIGHT_SCALE: i32 = 256;

/// A partition of the board into symmetric cell classes, each with an integer weight.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CellWeights {
    pub masks: [Bitboard; NUM_CELL_CLASSES],
    pub weights: [i32; NUM_CELL_CLASSES],
}

impl CellWeights {
    /// Corners, C-squares, A-squares, B-squares, X-squares, then the inner rings.
    pub const STANDARD: Self = Self {
        masks: [
            Bitboard::new(0x8100000000000081),
            Bitboard::new(0x4281000000008142),
            Bitboard::new(0x2400810000810024),
            Bitboard::new(0x1800008181000018),
            Bitboard::new(0x0042000000004200),
            Bitboard::new(0x0024420000422400),
            Bitboard::new(0x0018004242001800),
            Bitboard::new(0x0000240000240000),
            Bitboard::new(0x0000182424180000),
            Bitboard::new(0x0000001818000000),
        ],
        weights: [2714, 147, 69, -18, -577, -186, -153, -379, -122, -169],
    };

    /// The weighted material sum, still in [`WEIGHT_SCALE`] units.
    /// Saturates instead of overflowing for extreme custom weights.
    #[inline]
    pub fn raw_score(&self, mover: Bitboard, other: Bitboard) -> i32 {
        self.masks
            .iter()
            .zip(self.weights.iter())
            .map(|(&mask, &weight)| {
                let mine = (mover & mask).count_occupied() as i32;
                let theirs = (other & mask).count_occupied() as i32;
                weight.saturating_mul(mine - theirs)
            })
            .fold(0, i32::saturating_add)
    }
}

impl Default for CellWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}
