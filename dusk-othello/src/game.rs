//! Implements game-level Othello logic.
//!
//! [`Game`] layers colors, forced passes, termination and a move history over
//! the perspective-relative [`Board`]. For search, use [`Board`] directly.

use crate::board::{Board, Flip};
use crate::location::{Location, LocationList};
use crate::NUM_SPACES;
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Parse "black"/"b"/"x" or "white"/"w"/"o", case-insensitive.
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Player::Black),
            "white" | "w" | "o" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// Whether moves may still be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    GameOver,
}

/// Why a checked move was rejected. The game is left untouched.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum GameError {
    #[display(fmt = "the game is already over")]
    GameOver,
    #[display(fmt = "that move is not legal")]
    IllegalMove,
}

/// A played move and who played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub player: Player,
    pub flip: Flip,
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    active_player: Player,
    status: GameStatus,
    history: Vec<HistoryEntry>,
}

impl Default for Game {
    /// The standard opening, Black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a new game from the standard opening.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::default())
    }

    /// Start from an arbitrary position, `board.mover` belonging to `active_player`.
    /// If the mover has no legal move the turn passes, and if neither side can
    /// move the game is already over.
    pub fn from_board(board: Board, active_player: Player) -> Self {
        let mut game = Self {
            board,
            active_player,
            status: GameStatus::InProgress,
            history: Vec::new(),
        };
        game.settle();
        game
    }

    /// Return to the standard opening and clear the history.
    pub fn reset(&mut self) {
        self.board.reset();
        self.active_player = Player::default();
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// The underlying position, relative to [`active_player`](Self::active_player).
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// The color whose discs are `board().mover`.
    #[inline]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Every move played since the opening (or [`from_board`](Self::from_board)), in order.
    /// Passes are implicit: consecutive entries by the same player mean the opponent passed.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Legal moves for the active player; empty once the game is over.
    pub fn legal_moves(&self) -> LocationList {
        if self.is_over() {
            LocationList::default()
        } else {
            self.board.legal_moves()
        }
    }

    /// Row-major (A1 first) flags marking the cells the active player may play.
    pub fn legal_cell_mask(&self) -> [bool; NUM_SPACES] {
        self.legal_moves().bitboard().unpack()
    }

    pub fn is_legal(&self, loc: Location) -> bool {
        self.legal_moves().contains(loc)
    }

    /// Play a move for the active player, passing automatically for a side that
    /// cannot move and ending the game when neither can.
    /// `loc` must be legal; this is not checked. Does nothing once the game is over.
    pub fn play(&mut self, loc: Location) {
        if self.is_over() {
            return;
        }

        let flip = self.board.play(loc);
        self.history.push(HistoryEntry {
            player: self.active_player,
            flip,
        });
        self.active_player = !self.active_player;
        self.settle();
    }

    /// Play a move after checking that it is legal.
    pub fn try_play(&mut self, loc: Location) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_legal(loc) {
            return Err(GameError::IllegalMove);
        }

        self.play(loc);
        Ok(())
    }

    /// Resolve forced passes: one pass hands the turn over, two end the game.
    fn settle(&mut self) {
        if self.board.has_legal_move() {
            return;
        }

        self.board.pass();
        self.active_player = !self.active_player;

        if !self.board.has_legal_move() {
            self.status = GameStatus::GameOver;
        }
    }

    /// Number of black discs on the board.
    pub fn black_score(&self) -> u8 {
        match self.active_player {
            Player::Black => self.board.mover_count(),
            Player::White => self.board.other_count(),
        }
    }

    /// Number of white discs on the board.
    pub fn white_score(&self) -> u8 {
        match self.active_player {
            Player::Black => self.board.other_count(),
            Player::White => self.board.mover_count(),
        }
    }

    /// Final score from Black's perspective, with empty cells going to the winner.
    /// Only exact once the game is over.
    pub fn final_score(&self) -> i32 {
        match self.active_player {
            Player::Black => self.board.score(),
            Player::White => -self.board.score(),
        }
    }

    /// The player with more discs, or `None` for a draw or an unfinished game.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_over() {
            return None;
        }

        match self.black_score().cmp(&self.white_score()) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Draws Black as `X`, White as `O` and the active player's legal moves as `*`.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = match self.active_player {
            Player::Black => (self.board.mover, self.board.other),
            Player::White => (self.board.other, self.board.mover),
        };
        let legal = self.legal_moves().bitboard();

        let cells = (0..NUM_SPACES).map(|cell| {
            if black.has_cell(cell) {
                'X'
            } else if white.has_cell(cell) {
                'O'
            } else if legal.has_cell(cell) {
                '*'
            } else {
                '.'
            }
        });
        crate::utils::format_grid(cells, f)?;

        write!(
            f,
            "\nBlack {} - {} White",
            self.black_score(),
            self.white_score()
        )?;
        match self.status {
            GameStatus::InProgress => write!(f, "\n{} to move", self.active_player),
            GameStatus::GameOver => match self.winner() {
                Some(winner) => write!(f, "\nGame over: {} wins", winner),
                None => f.write_str("\nGame over: draw"),
            },
        }
    }
}
