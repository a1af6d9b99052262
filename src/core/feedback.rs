//! Guess feedback calculation and representation
//!
//! A Feedback holds one verdict per letter of a submitted guess:
//! - Absent: the letter has no unconsumed occurrence in the target
//! - WrongLocation: the letter occurs in the target, but not at this position
//! - Correct: the letter matches the target at this position

use super::{WORD_LENGTH, Word};

/// Verdict for a single guessed letter at a single position
///
/// Variant order is the keyboard upgrade order: once a key has seen a higher
/// verdict, a later guess can never pull it back down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    WrongLocation,
    Correct,
}

/// Per-letter feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All correct (winning guess)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Score `guess` against `target`
    ///
    /// Implements the standard duplicate-letter rules: each target letter can
    /// satisfy at most one verdict, and exact matches claim theirs first.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and remove each from
    ///    the target's available letter counts
    /// 2. Second pass: mark WrongLocation only while unconsumed occurrences
    ///    remain, else Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(
    ///     feedback.verdicts(),
    ///     &[
    ///         Verdict::Absent,
    ///         Verdict::Absent,
    ///         Verdict::Correct,
    ///         Verdict::Absent,
    ///         Verdict::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == target.chars()[i] {
                result[i] = Verdict::Correct;

                // Remove from the available pool
                let letter = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position, while occurrences remain
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Verdict::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = Verdict::WrongLocation;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Get the ordered verdict sequence
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Get the verdict at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn verdict_at(self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Check if every letter is Correct (the guess equals the target)
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::PERFECT
    }

    /// Count the Correct verdicts
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Convert feedback to emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨".
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, Word};
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(Feedback::score(&word, &word).to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|v| match v {
                Verdict::Correct => '🟩',
                Verdict::WrongLocation => '🟨',
                Verdict::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, WrongLocation};

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_win());
        assert_eq!(Feedback::PERFECT.count_correct(), 5);
    }

    #[test]
    fn feedback_all_absent() {
        let guess = Word::new("abcde").unwrap();
        let target = Word::new("fghij").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(feedback.verdicts(), &[Absent; 5]);
        assert!(!feedback.is_win());
    }

    #[test]
    fn feedback_all_correct() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::score(&word, &word);

        assert_eq!(feedback, Feedback::PERFECT);
        assert!(feedback.is_win());
    }

    #[test]
    fn feedback_self_match_always_wins() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Feedback::score(&w, &w), Feedback::PERFECT);
        }
    }

    #[test]
    fn feedback_duplicate_guess_letter_consumed_by_exact_match() {
        // AABBC vs ABCDE: the target's single A is consumed by the exact match
        // at position 0, so the second A must NOT be WrongLocation.
        let guess = Word::new("aabbc").unwrap();
        let target = Word::new("abcde").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(
            feedback.verdicts(),
            &[Correct, Absent, WrongLocation, Absent, WrongLocation]
        );
    }

    #[test]
    fn feedback_duplicate_letters_both_wrong_location() {
        // SPEED vs ERASE
        // S(wrong location) P(absent) E(wrong location) E(wrong location) D(absent)
        // ERASE has two E's, so both guessed E's earn a mark.
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(
            feedback.verdicts(),
            &[WrongLocation, Absent, WrongLocation, WrongLocation, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_letters_exact_match_priority() {
        // ROBOT vs FLOOR
        // R(wrong location) O(wrong location) B(absent) O(correct) T(absent)
        // The second O claims its exact match even though the first O came earlier.
        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(
            feedback.verdicts(),
            &[WrongLocation, WrongLocation, Absent, Correct, Absent]
        );
    }

    #[test]
    fn feedback_triple_guess_letter_double_target() {
        // EEVEE vs EERIE: exact matches at 0, 1, and 4 consume all three of
        // the target's E's, leaving nothing for the E at position 3.
        let guess = Word::new("eevee").unwrap();
        let target = Word::new("eerie").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(feedback.verdicts(), &[Correct, Correct, Absent, Absent, Correct]);
    }

    #[test]
    fn feedback_verdict_at() {
        let guess = Word::new("train").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(feedback.verdict_at(0), Absent);
        assert_eq!(feedback.verdict_at(1), Correct);
        assert_eq!(feedback.verdict_at(2), Correct);
        assert_eq!(feedback.verdict_at(3), Absent);
        assert_eq!(feedback.verdict_at(4), WrongLocation);
    }

    #[test]
    fn feedback_to_emoji() {
        let guess = Word::new("train").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(feedback.to_emoji(), "⬜🟩🟩⬜🟨");
    }

    #[test]
    fn verdict_upgrade_ordering() {
        assert!(Absent < WrongLocation);
        assert!(WrongLocation < Correct);
    }
}
