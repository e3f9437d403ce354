//! `dusk-othello` is the board layer of the dusk Othello engine.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw bit-twiddling primitives: counting, scanning
//!    and cell/square index conversions.
//!  - [`Board`] implements the core, perspective-relative game logic in a fast,
//!    unchecked way. This is what search code works with.
//!  - [`Game`] is the safe, color-aware interface: forced passes, game over,
//!    scores per color and a move history.
//!
//! Static evaluation lives in [`eval`]; [`test_utils`] holds reference
//! implementations and playout helpers shared by tests and benchmarks.

pub mod bitboard;
pub mod eval;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use bitboard::Bitboard;
pub use board::*;
pub use eval::CellWeights;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;

/// Maximum achievable absolute-difference score.
pub const MAX_SCORE: i32 = NUM_SPACES as i32;
