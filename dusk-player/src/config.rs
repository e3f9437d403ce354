//! Search configuration.

use dusk_othello::CellWeights;

/// Plies searched when no depth is configured.
pub const DEFAULT_DEPTH: u32 = 5;

/// How deep the AI looks ahead and how it scores positions at the horizon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search from the root; values below 1 are treated as 1.
    pub depth: u32,
    pub weights: CellWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            weights: CellWeights::STANDARD,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(self, depth: u32) -> Self {
        Self { depth, ..self }
    }

    pub fn with_weights(self, weights: CellWeights) -> Self {
        Self { weights, ..self }
    }
}
