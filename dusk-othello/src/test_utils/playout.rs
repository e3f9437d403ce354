//! Random legal playouts, for property tests and benchmark corpora.

use crate::board::Board;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Play up to `plies` uniformly random legal moves from the opening, passing
/// when forced. Stops early when neither side can move.
pub fn random_playout<R: Rng + ?Sized>(rng: &mut R, plies: usize) -> Board {
    let mut board = Board::new();

    for _ in 0..plies {
        match board.legal_moves().choose(rng) {
            Some(loc) => {
                board.play(loc);
            }
            None => {
                board.pass();
                if !board.has_legal_move() {
                    break;
                }
            }
        }
    }

    board
}

/// `count` positions reached by random playouts of random length.
pub fn random_positions<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Board> {
    (0..count)
        .map(|_| {
            let plies = rng.gen_range(0..=60);
            random_playout(rng, plies)
        })
        .collect()
}
