//! Daily word puzzle
//!
//! A five-letter word-guessing game with a deterministic date-keyed answer,
//! duplicate-aware letter scoring, and per-key hint tracking.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::Word;
//! use wordle_daily::game::{MAX_ATTEMPTS, Outcome, Session, SubmitResult};
//! use wordle_daily::wordlists::Catalog;
//!
//! let catalog = Catalog::embedded();
//! let target = Word::new("crane").unwrap();
//! let mut session = Session::new(&catalog, target, MAX_ATTEMPTS);
//!
//! for ch in "crane".chars() {
//!     session.press_letter(ch);
//! }
//!
//! let result = session.submit_guess().unwrap();
//! assert!(matches!(
//!     result,
//!     SubmitResult::Scored { outcome: Outcome::Won, .. }
//! ));
//! ```

// Core domain types
pub mod core;

// Game state and lifecycle
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
