//! Game state and lifecycle
//!
//! Day selection, the board, per-key classification, and the session state
//! machine a presentation layer drives.

mod board;
pub mod daily;
mod keyboard;
mod session;

pub use board::{Board, BoardError, Guess};
pub use keyboard::Keyboard;
pub use session::{
    MAX_ATTEMPTS, Outcome, RejectReason, Session, SessionError, Status, SubmitResult,
};
