//! Running the root search on a worker thread.

use crate::cancel::CancelToken;
use crate::config::SearchConfig;
use crate::search::{self, AiResult, SearchContext};
use dusk_othello::Board;
use std::io;
use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, error, info};

/// A single background search over a private copy of the board.
///
/// The worker shares nothing with its owner except the cancellation flag and
/// the slot it writes its result into. Dropping the task cancels and joins it.
#[derive(Debug)]
pub struct SearchTask {
    cancel: CancelToken,
    outcome: Arc<OnceLock<AiResult>>,
    handle: Option<JoinHandle<()>>,
}

impl SearchTask {
    /// Start searching `board` for the side to move.
    pub fn spawn(board: Board, config: &SearchConfig) -> io::Result<Self> {
        let cancel = CancelToken::new();
        let outcome = Arc::new(OnceLock::new());
        let config = *config;

        let handle = {
            let cancel = cancel.clone();
            let outcome = Arc::clone(&outcome);
            thread::Builder::new()
                .name("dusk-search".into())
                .spawn(move || run(board, config, &cancel, &outcome))?
        };

        Ok(Self {
            cancel,
            outcome,
            handle: Some(handle),
        })
    }

    /// True once the worker has stopped, whether it finished or was cancelled.
    pub fn is_ready(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// The finished result, if there is one yet. Never blocks.
    pub fn peek(&self) -> Option<AiResult> {
        self.outcome.get().copied()
    }

    /// Wait for the worker and take its result. `None` if the search was
    /// cancelled, the side to move had no legal move, or the worker panicked.
    pub fn join(mut self) -> Option<AiResult> {
        self.wait();
        self.peek()
    }

    /// Cancel the search and wait for the worker to unwind.
    pub fn abort(mut self) {
        self.cancel.cancel();
        self.wait();
    }

    fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("search worker panicked");
            }
        }
    }
}

impl Drop for SearchTask {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.cancel.cancel();
            self.wait();
        }
    }
}

fn run(board: Board, config: SearchConfig, cancel: &CancelToken, outcome: &OnceLock<AiResult>) {
    let started = Instant::now();
    let moves = board.legal_moves().len();
    debug!(depth = config.depth, moves, "search started");

    let ctx = SearchContext::new(cancel, &config.weights);
    let result = search::select_move(board, config.depth, &ctx);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if cancel.is_cancelled() {
        debug!(nodes = ctx.nodes(), elapsed_ms, "search cancelled");
        return;
    }

    match result {
        Some(result) => {
            info!(
                location = %result.location,
                value = result.value,
                nodes = ctx.nodes(),
                elapsed_ms,
                "search finished"
            );
            publish(outcome, result);
        }
        None => debug!("search found no legal move"),
    }
}

/// Store the finished result. The slot is written once per task; a second
/// write is a bug and is reported without replacing the first result.
fn publish(outcome: &OnceLock<AiResult>, result: AiResult) -> bool {
    match outcome.set(result) {
        Ok(()) => true,
        Err(rejected) => {
            error!(location = %rejected.location, "search result already published");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_and_reports() {
        let board = Board::new();
        let task = SearchTask::spawn(board, &SearchConfig::default().with_depth(3)).unwrap();
        let result = task.join().unwrap();
        assert!(board.legal_moves().contains(result.location));
    }

    #[test]
    fn polls_until_ready() {
        let task = SearchTask::spawn(Board::new(), &SearchConfig::default().with_depth(1)).unwrap();
        while !task.is_ready() {
            thread::yield_now();
        }
        assert!(task.join().is_some());
    }

    #[test]
    fn abort_discards_the_result() {
        let task = SearchTask::spawn(Board::new(), &SearchConfig::default().with_depth(12)).unwrap();
        let outcome = Arc::clone(&task.outcome);
        task.abort();
        assert!(outcome.get().is_none());
    }

    #[test]
    fn result_is_published_once() {
        let outcome = OnceLock::new();
        let first = AiResult {
            location: "D3".parse().unwrap(),
            value: 2,
        };
        let second = AiResult {
            location: "C4".parse().unwrap(),
            value: 9,
        };

        assert!(publish(&outcome, first));
        assert!(!publish(&outcome, second));
        assert_eq!(outcome.get(), Some(&first));
    }

    #[test]
    fn drop_cancels_the_worker() {
        let task = SearchTask::spawn(Board::new(), &SearchConfig::default().with_depth(12)).unwrap();
        let cancel = task.cancel.clone();
        drop(task);
        assert!(cancel.is_cancelled());
    }
}
