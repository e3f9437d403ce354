//! Depth-limited negamax search with alpha-beta pruning.
//!
//! All values are predicted final disc differentials from the point of view of
//! the side to move, in `[-MAX_SCORE, MAX_SCORE]`.

use crate::cancel::CancelToken;
use arrayvec::ArrayVec;
use dusk_othello::{Board, CellWeights, Location, MAX_SCORE, NUM_SPACES};
use itertools::Itertools;
use std::cell::Cell;
use tracing::trace;

/// The move picked at the root and its value for the side that plays it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiResult {
    pub location: Location,
    pub value: i32,
}

/// Per-search state threaded through every recursive call.
#[derive(Debug)]
pub struct SearchContext<'a> {
    cancel: &'a CancelToken,
    weights: &'a CellWeights,
    nodes: Cell<u64>,
}

impl<'a> SearchContext<'a> {
    pub fn new(cancel: &'a CancelToken, weights: &'a CellWeights) -> Self {
        Self {
            cancel,
            weights,
            nodes: Cell::new(0),
        }
    }

    /// Nodes visited so far, cancelled ones included.
    pub fn nodes(&self) -> u64 {
        self.nodes.get()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Fail-hard negamax with alpha-beta pruning.
///
/// `passed` means the previous ply was a forced pass, so a second one ends the
/// game and the exact score is returned. Once cancellation is requested every
/// call returns `-MAX_SCORE` immediately; such values are meaningless and the
/// caller must discard the search.
pub fn nega_alpha(
    mut board: Board,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    passed: bool,
    ctx: &SearchContext,
) -> i32 {
    ctx.nodes.set(ctx.nodes.get() + 1);

    if ctx.is_cancelled() {
        return -MAX_SCORE;
    }

    if depth == 0 {
        return board.evaluate_with(ctx.weights);
    }

    let moves = board.legal_moves();
    if moves.bitboard().is_empty() {
        // Both players pass: game ends
        if passed {
            return board.score();
        }

        // I pass, but my opponent may have moves
        board.pass();
        return -nega_alpha(board, depth, -beta, -alpha, true, ctx);
    }

    for loc in moves {
        let flip = board.play(loc);
        alpha = alpha.max(-nega_alpha(board, depth - 1, -beta, -alpha, false, ctx));
        board.undo(flip);

        // Fail high: the opponent will never allow this line.
        if beta <= alpha {
            break;
        }
    }

    alpha
}

/// Plain negamax without pruning. Same leaf and pass rules as [`nega_alpha`];
/// only useful as a reference.
pub fn negamax(mut board: Board, depth: u32, passed: bool, weights: &CellWeights) -> i32 {
    if depth == 0 {
        return board.evaluate_with(weights);
    }

    let moves = board.legal_moves();
    if moves.bitboard().is_empty() {
        if passed {
            return board.score();
        }

        board.pass();
        return -negamax(board, depth, true, weights);
    }

    moves
        .map(|loc| {
            let flip = board.play(loc);
            let value = -negamax(board, depth - 1, false, weights);
            board.undo(flip);
            value
        })
        .fold(-MAX_SCORE, i32::max)
}

/// Pick the best move for the side to move, searching `depth` plies (at least 1).
///
/// Ties keep the first move found in lowest-square order. Returns `None` when
/// the side to move has no legal move.
pub fn select_move(mut board: Board, depth: u32, ctx: &SearchContext) -> Option<AiResult> {
    let depth = depth.max(1);
    let mut best: Option<AiResult> = None;
    let mut best_value = -MAX_SCORE - 1;

    // Values of moves that did not improve on `best` are only upper bounds.
    let mut bounds: ArrayVec<[(Location, i32); NUM_SPACES]> = ArrayVec::new();

    for loc in board.legal_moves() {
        let flip = board.play(loc);
        let value = -nega_alpha(board, depth - 1, -MAX_SCORE, -best_value, false, ctx);
        board.undo(flip);

        if ctx.is_cancelled() {
            return None;
        }

        bounds.push((loc, value));
        if value > best_value {
            best_value = value;
            best = Some(AiResult {
                location: loc,
                value,
            });
        }
    }

    trace!(
        depth,
        root = %bounds.iter().map(|(loc, value)| format!("{}:{}", loc, value)).join(" "),
        "root moves searched"
    );

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use dusk_othello::Bitboard;

    fn search(board: Board, depth: u32) -> Option<AiResult> {
        let cancel = CancelToken::new();
        let weights = CellWeights::STANDARD;
        select_move(board, depth, &SearchContext::new(&cancel, &weights))
    }

    #[test]
    fn depth_one_takes_the_best_static_move() {
        let board = Board::new();
        let result = search(board, 1).unwrap();

        let best = board
            .legal_moves()
            .map(|loc| {
                let mut next = board;
                next.play(loc);
                -next.evaluate()
            })
            .max()
            .unwrap();
        assert_eq!(result.value, best);
        assert!(board.legal_moves().contains(result.location));
    }

    #[test]
    fn opening_is_symmetric_at_depth_one() {
        // All four opening moves are equivalent, so the first one scanned wins.
        let board = Board::new();
        let result = search(board, 1).unwrap();
        assert_eq!(Some(result.location), board.legal_moves().next());
    }

    #[test]
    fn no_moves_means_no_result() {
        let board = Board::from_bitboards(Bitboard::FULL, Bitboard::EMPTY);
        assert_eq!(search(board, 3), None);
    }

    #[test]
    fn finds_a_wipeout() {
        // Taking C1 captures White's last disc: an exact 64-point win.
        let board: Board = "X O - - - - - -
                            - - - - - - - -
                            - - - - - - - -
                            - - - - - - - -
                            - - - - - - - -
                            - - - - - - - -
                            - - - - - - - -
                            - - - - - - - -"
            .parse()
            .unwrap();
        let result = search(board, 4).unwrap();
        assert_eq!(result.location.to_string(), "C1");
        assert_eq!(result.value, MAX_SCORE);
    }

    #[test]
    fn double_pass_returns_exact_score() {
        let board = Board::from_bitboards(Bitboard::new(0b111), Bitboard::from_square(40));
        let cancel = CancelToken::new();
        let weights = CellWeights::STANDARD;
        let ctx = SearchContext::new(&cancel, &weights);

        // Neither side can move: the score is exact regardless of depth.
        assert!(!board.has_legal_move());
        assert_eq!(nega_alpha(board, 5, -MAX_SCORE, MAX_SCORE, false, &ctx), board.score());
        assert_eq!(negamax(board, 5, false, &weights), board.score());
    }

    #[test]
    fn cancelled_search_returns_sentinel() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let weights = CellWeights::STANDARD;
        let ctx = SearchContext::new(&cancel, &weights);

        assert_eq!(
            nega_alpha(Board::new(), 6, -MAX_SCORE, MAX_SCORE, false, &ctx),
            -MAX_SCORE
        );
        assert_eq!(select_move(Board::new(), 6, &ctx), None);
        assert_eq!(ctx.nodes(), 2);
    }

    #[test]
    fn counts_nodes() {
        let cancel = CancelToken::new();
        let weights = CellWeights::STANDARD;
        let ctx = SearchContext::new(&cancel, &weights);
        select_move(Board::new(), 1, &ctx);
        assert_eq!(ctx.nodes(), 4);
    }
}
