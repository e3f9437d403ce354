//! `dusk-player` is the Othello AI and the host-facing game session built on
//! [`dusk_othello`].
//!
//!  - [`search`] holds the depth-limited alpha-beta search itself.
//!  - [`SearchTask`] runs one search on a worker thread with its own [`CancelToken`].
//!  - [`Session`] is what a UI talks to: it owns a game, applies human moves and
//!    drives the AI without ever blocking the caller.

mod cancel;
mod config;
pub mod search;
mod session;
mod task;

pub use cancel::CancelToken;
pub use config::{SearchConfig, DEFAULT_DEPTH};
pub use search::AiResult;
pub use session::{Session, SessionError};
pub use task::SearchTask;
