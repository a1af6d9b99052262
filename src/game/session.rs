//! Game session state machine
//!
//! Orchestrates the catalog, the day's target, the board, and the keyboard
//! classification into a single lifecycle: in progress, then won or lost.

use crate::core::{Feedback, Word};
use crate::game::board::{Board, Guess};
use crate::game::keyboard::Keyboard;
use crate::wordlists::{Catalog, CatalogError};
use chrono::NaiveDate;
use std::fmt;

/// Guesses per game, matching the six board rows of the classic layout
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// Why a submission was turned away without being scored
///
/// Rejections are normal outcomes, not errors: the session stays in progress
/// and the player keeps editing the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    TooShort,
    NotInWordList,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Not enough letters"),
            Self::NotInWordList => write!(f, "Not in word list"),
        }
    }
}

/// Where a scored submission leaves the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The entry was not accepted; it remains on the board for editing
    Rejected(RejectReason),
    /// The entry was scored and recorded
    Scored { guess: Guess, outcome: Outcome },
}

/// Error type for operations on a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    GameOver,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One game against one target word
///
/// Owned by a single presentation context; every operation completes before
/// returning and commits atomically or not at all.
pub struct Session<'a> {
    catalog: &'a Catalog,
    target: Word,
    board: Board,
    keyboard: Keyboard,
    status: Status,
    max_attempts: usize,
}

impl<'a> Session<'a> {
    /// Start a session against an explicit target word
    #[must_use]
    pub fn new(catalog: &'a Catalog, target: Word, max_attempts: usize) -> Self {
        Self {
            catalog,
            target,
            board: Board::new(),
            keyboard: Keyboard::new(),
            status: Status::InProgress,
            max_attempts,
        }
    }

    /// Start the session for a calendar date
    ///
    /// The day index is computed once here and the target held fixed for the
    /// life of the session.
    ///
    /// # Errors
    /// Returns `CatalogError::IndexOutOfRange` when the date falls outside
    /// the target schedule; the caller must surface this as a configuration
    /// error.
    pub fn daily(
        catalog: &'a Catalog,
        on: NaiveDate,
        epoch: NaiveDate,
        max_attempts: usize,
    ) -> Result<Self, CatalogError> {
        let target = super::daily::target_for_date(catalog, on, epoch)?.clone();
        Ok(Self::new(catalog, target, max_attempts))
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// True once the session is won or lost
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// The answer for this session
    ///
    /// Presentation layers reveal it on a loss; nothing in the core prints it.
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// The board: submitted rows plus the active entry
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Per-key classification across submitted guesses
    #[inline]
    #[must_use]
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Total guesses allowed in this session
    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Guesses still available
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.board.guess_count())
    }

    /// Append a letter to the active entry; no-op once the game is over
    pub fn press_letter(&mut self, ch: char) {
        if self.status != Status::InProgress {
            return;
        }
        self.board.push_letter(ch);
    }

    /// Delete the last active letter; no-op once the game is over
    pub fn delete_letter(&mut self) {
        if self.status != Status::InProgress {
            return;
        }
        self.board.pop_letter();
    }

    /// Submit the active entry as a guess
    ///
    /// A short or out-of-dictionary entry is rejected and kept on the board.
    /// An accepted entry is scored, recorded immutably, folded into the key
    /// classification, and checked for termination: win on an exact match,
    /// loss when the last attempt is spent without one.
    ///
    /// # Errors
    /// Returns `SessionError::GameOver` if the session is already terminal;
    /// the board and status are left untouched.
    pub fn submit_guess(&mut self) -> Result<SubmitResult, SessionError> {
        if self.status != Status::InProgress {
            return Err(SessionError::GameOver);
        }

        let Ok(candidate) = self.board.active_word() else {
            return Ok(SubmitResult::Rejected(RejectReason::TooShort));
        };

        if !self.catalog.is_valid_guess(&candidate) {
            return Ok(SubmitResult::Rejected(RejectReason::NotInWordList));
        }

        // Everything the submission needs is computed before any state moves
        let feedback = Feedback::score(&candidate, &self.target);

        self.keyboard.record(&candidate, feedback);
        let guess = self.board.record_guess(candidate, feedback);
        self.board.clear_active();

        let outcome = if feedback.is_win() {
            self.status = Status::Won;
            Outcome::Won
        } else if self.board.guess_count() >= self.max_attempts {
            self.status = Status::Lost;
            Outcome::Lost
        } else {
            Outcome::Continue
        };

        Ok(SubmitResult::Scored { guess, outcome })
    }
}
