//! One-shot guess scoring

use crate::core::{Feedback, Word};

/// Result of scoring a single guess against a target
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score one guess/target pair
///
/// # Errors
///
/// Returns an error string if either word is not a valid five-letter word.
pub fn score_pair(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target '{target}': {e}"))?;

    let feedback = Feedback::score(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
