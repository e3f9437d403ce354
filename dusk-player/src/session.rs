//! The host-facing game session: a [`Game`] plus at most one background search.
//!
//! A GUI drives a session once per frame: render from [`Session::game`], apply
//! clicks with [`Session::apply_move`], and on the AI's turn call
//! [`Session::request_ai_move`] until it yields a move.

use crate::config::SearchConfig;
use crate::search::AiResult;
use crate::task::SearchTask;
use dusk_othello::{Game, GameError, Location, Player, NUM_SPACES};
use derive_more::Display;
use std::io;
use tracing::{debug, info, warn};

/// Why a session request was refused. The session is left untouched.
#[derive(Debug, Display)]
pub enum SessionError {
    #[display(fmt = "{}", _0)]
    Game(GameError),
    /// A search is already running; finish or abort it first.
    #[display(fmt = "a search is already in progress")]
    SearchInProgress,
    /// The worker thread could not be started.
    #[display(fmt = "cannot start search thread: {}", _0)]
    Spawn(io::Error),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Game(err) => Some(err),
            SessionError::SearchInProgress => None,
            SessionError::Spawn(err) => Some(err),
        }
    }
}

impl From<GameError> for SessionError {
    fn from(err: GameError) -> Self {
        SessionError::Game(err)
    }
}

/// A game in progress together with its (optional) pending AI search.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    config: SearchConfig,
    task: Option<SearchTask>,
    last_evaluation: Option<i32>,
}

impl Session {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            game: Game::new(),
            config,
            task: None,
            last_evaluation: None,
        }
    }

    /// Continue from an existing game.
    pub fn from_game(game: Game, config: SearchConfig) -> Self {
        Self {
            game,
            ..Self::new(config)
        }
    }

    /// Start a new game. Any running search is cancelled and joined first,
    /// so no worker ever observes the reset.
    pub fn reset(&mut self) {
        self.abort_search();
        self.game.reset();
        self.last_evaluation = None;
        debug!("session reset");
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Takes effect from the next search.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    pub fn active_player(&self) -> Player {
        self.game.active_player()
    }

    /// Row-major (A1 first) flags marking the cells the active player may play.
    pub fn legal_cell_mask(&self) -> [bool; NUM_SPACES] {
        self.game.legal_cell_mask()
    }

    pub fn black_score(&self) -> u8 {
        self.game.black_score()
    }

    pub fn white_score(&self) -> u8 {
        self.game.white_score()
    }

    /// The AI's value for the last move it played, from its own point of view.
    pub fn last_evaluation(&self) -> Option<i32> {
        self.last_evaluation
    }

    /// Play a move for the active player at a row-major cell index (A1 = 0).
    pub fn apply_move(&mut self, cell: usize) -> Result<(), SessionError> {
        if self.task.is_some() {
            return Err(SessionError::SearchInProgress);
        }

        let loc = Location::from_cell(cell).ok_or(GameError::IllegalMove)?;
        self.play(loc)?;
        Ok(())
    }

    fn play(&mut self, loc: Location) -> Result<(), GameError> {
        let player = self.game.active_player();
        self.game.try_play(loc)?;
        debug!(%player, location = %loc, "move played");

        if self.game.is_over() {
            info!(
                black = self.game.black_score(),
                white = self.game.white_score(),
                "game over"
            );
        } else if self.game.active_player() == player {
            let passed = !player;
            debug!(%passed, "forced pass");
        }
        Ok(())
    }

    /// Whether a background search has been started and not yet collected.
    pub fn is_searching(&self) -> bool {
        self.task.is_some()
    }

    /// Launch a background search for the active player on a copy of the board.
    pub fn start_search(&mut self) -> Result<(), SessionError> {
        if self.task.is_some() {
            return Err(SessionError::SearchInProgress);
        }
        if self.game.is_over() {
            return Err(GameError::GameOver.into());
        }

        let task =
            SearchTask::spawn(self.game.board(), &self.config).map_err(SessionError::Spawn)?;
        self.task = Some(task);
        Ok(())
    }

    /// The result of the running search, once it has one. Never blocks and
    /// never changes the game.
    pub fn poll_result(&self) -> Option<AiResult> {
        self.task.as_ref().and_then(SearchTask::peek)
    }

    /// If the running search has finished, play its move and return it.
    pub fn finish_search(&mut self) -> Option<AiResult> {
        self.poll_result()?;
        let result = self.task.take()?.join()?;

        if let Err(err) = self.play(result.location) {
            warn!(location = %result.location, %err, "discarding search result");
            return None;
        }
        self.last_evaluation = Some(result.value);
        Some(result)
    }

    /// Per-frame driver for the AI's turn: starts a search if none is running
    /// and returns the move once it has been found and played.
    pub fn request_ai_move(&mut self) -> Option<AiResult> {
        if self.task.is_none() {
            if let Err(err) = self.start_search() {
                debug!(%err, "not starting search");
                return None;
            }
        }

        if let Some(task) = &self.task {
            if task.is_ready() && task.peek().is_none() {
                // The worker stopped without an answer; clear the slot so the
                // next request starts over.
                self.task = None;
                return None;
            }
        }

        self.finish_search()
    }

    /// Cancel the running search, if any, and wait for its worker to exit.
    pub fn abort_search(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("search aborted");
        }
    }
}
