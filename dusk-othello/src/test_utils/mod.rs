//! Utilities used for testing and benchmarking.

mod naive;
pub use naive::{naive_flips, naive_legal_moves};

mod perft;
pub use perft::run_perft;

mod playout;
pub use playout::{random_playout, random_positions};
