//! Board state: submitted guess rows plus the in-progress entry

use crate::core::{Feedback, WORD_LENGTH, Word};
use std::fmt;

/// A submitted word and its scored feedback
///
/// Produced once at submission and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    pub(crate) fn new(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    /// The submitted word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The verdict sequence the word scored
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Error type for reading the active entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The active entry has fewer than `WORD_LENGTH` letters
    IncompleteGuess(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess(len) => {
                write!(f, "Active entry has {len} of {WORD_LENGTH} letters")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Submitted guesses in order, plus the letters typed so far
#[derive(Debug, Clone, Default)]
pub struct Board {
    guesses: Vec<Guess>,
    active: String,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter to the active entry
    ///
    /// Accepts single ASCII alphabetic characters only, normalized to
    /// lowercase. Anything else, or a full entry, is a silent no-op.
    pub fn push_letter(&mut self, ch: char) {
        if self.active.len() >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return;
        }
        self.active.push(ch.to_ascii_lowercase());
    }

    /// Remove the last letter of the active entry; no-op when empty
    pub fn pop_letter(&mut self) {
        self.active.pop();
    }

    /// The letters typed so far
    #[inline]
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Number of letters typed so far
    #[inline]
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Read the active entry as a complete word
    ///
    /// The entry itself is left untouched; the caller clears it after a
    /// successful submission.
    ///
    /// # Errors
    /// Returns `BoardError::IncompleteGuess` unless exactly `WORD_LENGTH`
    /// letters have been typed.
    ///
    /// # Panics
    /// Will not panic - `push_letter` only admits lowercase ASCII letters.
    pub fn active_word(&self) -> Result<Word, BoardError> {
        if self.active.len() != WORD_LENGTH {
            return Err(BoardError::IncompleteGuess(self.active.len()));
        }

        Ok(Word::new(self.active.clone()).expect("active entry holds five lowercase letters"))
    }

    pub(crate) fn clear_active(&mut self) {
        self.active.clear();
    }

    pub(crate) fn record_guess(&mut self, word: Word, feedback: Feedback) -> Guess {
        let guess = Guess::new(word, feedback);
        self.guesses.push(guess.clone());
        guess
    }

    /// Submitted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Number of submitted guesses
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_letter_fills_entry() {
        let mut board = Board::new();
        for ch in "crane".chars() {
            board.push_letter(ch);
        }

        assert_eq!(board.active(), "crane");
        assert_eq!(board.active_len(), 5);
    }

    #[test]
    fn push_letter_normalizes_case() {
        let mut board = Board::new();
        board.push_letter('C');
        board.push_letter('r');

        assert_eq!(board.active(), "cr");
    }

    #[test]
    fn push_letter_rejects_non_alphabetic() {
        let mut board = Board::new();
        board.push_letter('3');
        board.push_letter(' ');
        board.push_letter('!');
        board.push_letter('é');

        assert_eq!(board.active(), "");
    }

    #[test]
    fn push_letter_ignores_overflow() {
        let mut board = Board::new();
        for ch in "cranes".chars() {
            board.push_letter(ch);
        }

        assert_eq!(board.active(), "crane");
    }

    #[test]
    fn pop_letter_removes_last() {
        let mut board = Board::new();
        board.push_letter('c');
        board.push_letter('r');
        board.pop_letter();

        assert_eq!(board.active(), "c");
    }

    #[test]
    fn pop_letter_on_empty_is_noop() {
        let mut board = Board::new();
        board.pop_letter();

        assert_eq!(board.active(), "");
    }

    #[test]
    fn active_word_requires_full_entry() {
        let mut board = Board::new();
        board.push_letter('c');

        assert_eq!(board.active_word(), Err(BoardError::IncompleteGuess(1)));
        // Failed read leaves the entry intact
        assert_eq!(board.active(), "c");
    }

    #[test]
    fn active_word_on_full_entry() {
        let mut board = Board::new();
        for ch in "crane".chars() {
            board.push_letter(ch);
        }

        assert_eq!(board.active_word().unwrap().text(), "crane");
    }

    #[test]
    fn record_guess_appends_in_order() {
        let mut board = Board::new();
        let target = Word::new("crane").unwrap();

        for text in ["slate", "train"] {
            let word = Word::new(text).unwrap();
            let feedback = Feedback::score(&word, &target);
            board.record_guess(word, feedback);
        }

        assert_eq!(board.guess_count(), 2);
        assert_eq!(board.guesses()[0].word().text(), "slate");
        assert_eq!(board.guesses()[1].word().text(), "train");
    }
}
