//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking and tuning move generation.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), depth, false)
}

fn leaves_below(mut board: Board, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves();
    if all_moves.bitboard().is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        board.pass();
        return leaves_below(board, depth - 1, true);
    }

    all_moves
        .map(|loc| {
            let flip = board.play(loc);
            let leaves = leaves_below(board, depth - 1, false);
            board.undo(flip);
            leaves
        })
        .sum()
}
