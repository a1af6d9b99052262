//! Dictionary and daily target list lookup

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// The valid-guess dictionary plus the ordered daily target list
///
/// Membership tests are O(1); the target list keeps the order it was
/// supplied in, since position in the list is the daily schedule.
#[derive(Debug, Clone)]
pub struct Catalog {
    dictionary: FxHashSet<Word>,
    targets: Vec<Word>,
}

/// Error type for target lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested day index is negative or past the end of the target list
    IndexOutOfRange { index: i64, available: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, available } => {
                write!(
                    f,
                    "Day index {index} is outside the target list (0..{available})"
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl Catalog {
    /// Create a catalog from a guess dictionary and an ordered target list
    ///
    /// Targets are always added to the dictionary as well: the day's answer
    /// must itself be a submittable guess.
    #[must_use]
    pub fn new(dictionary: Vec<Word>, targets: Vec<Word>) -> Self {
        let mut set: FxHashSet<Word> = dictionary.into_iter().collect();
        set.extend(targets.iter().cloned());

        Self {
            dictionary: set,
            targets,
        }
    }

    /// Create a catalog from the embedded default word lists
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::wordlists::Catalog;
    ///
    /// let catalog = Catalog::embedded();
    /// assert!(catalog.target_count() > 0);
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        use super::loader::words_from_slice;
        use super::{DICTIONARY, TARGETS};

        Self::new(words_from_slice(DICTIONARY), words_from_slice(TARGETS))
    }

    /// Check whether a word is an acceptable guess
    ///
    /// Case-insensitivity falls out of `Word` normalization at construction.
    #[inline]
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    /// Get the target word scheduled at `index`
    ///
    /// # Errors
    /// Returns `CatalogError::IndexOutOfRange` if `index` is negative or
    /// >= the target list length. Exhaustion is a configuration error the
    /// caller must surface, never silently default.
    pub fn target_for_index(&self, index: i64) -> Result<&Word, CatalogError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.targets.get(i))
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                available: self.targets.len(),
            })
    }

    /// Get the full ordered target list
    #[inline]
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Number of scheduled target words
    #[inline]
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Number of acceptable guess words (targets included)
    #[inline]
    #[must_use]
    pub fn dictionary_count(&self) -> usize {
        self.dictionary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_catalog() -> Catalog {
        let dictionary = vec![
            Word::new("slate").unwrap(),
            Word::new("train").unwrap(),
            Word::new("adieu").unwrap(),
        ];
        let targets = vec![
            Word::new("crane").unwrap(),
            Word::new("pilot").unwrap(),
            Word::new("gloom").unwrap(),
        ];
        Catalog::new(dictionary, targets)
    }

    #[test]
    fn catalog_membership() {
        let catalog = setup_catalog();

        assert!(catalog.is_valid_guess(&Word::new("slate").unwrap()));
        assert!(catalog.is_valid_guess(&Word::new("adieu").unwrap()));
        assert!(!catalog.is_valid_guess(&Word::new("xylyl").unwrap()));
    }

    #[test]
    fn catalog_membership_case_insensitive() {
        let catalog = setup_catalog();

        // Word::new normalizes, so uppercase input matches
        assert!(catalog.is_valid_guess(&Word::new("SLATE").unwrap()));
    }

    #[test]
    fn catalog_targets_are_valid_guesses() {
        let catalog = setup_catalog();

        assert!(catalog.is_valid_guess(&Word::new("crane").unwrap()));
        assert!(catalog.is_valid_guess(&Word::new("gloom").unwrap()));
    }

    #[test]
    fn catalog_target_for_index() {
        let catalog = setup_catalog();

        assert_eq!(catalog.target_for_index(0).unwrap().text(), "crane");
        assert_eq!(catalog.target_for_index(2).unwrap().text(), "gloom");
    }

    #[test]
    fn catalog_target_index_negative() {
        let catalog = setup_catalog();

        assert_eq!(
            catalog.target_for_index(-1),
            Err(CatalogError::IndexOutOfRange {
                index: -1,
                available: 3
            })
        );
    }

    #[test]
    fn catalog_target_index_past_end() {
        let catalog = setup_catalog();

        assert_eq!(
            catalog.target_for_index(3),
            Err(CatalogError::IndexOutOfRange {
                index: 3,
                available: 3
            })
        );
    }

    #[test]
    fn catalog_counts() {
        let catalog = setup_catalog();

        assert_eq!(catalog.target_count(), 3);
        // 3 dictionary words + 3 targets, no overlap
        assert_eq!(catalog.dictionary_count(), 6);
    }

    #[test]
    fn catalog_duplicate_words_collapse() {
        let dictionary = vec![
            Word::new("slate").unwrap(),
            Word::new("slate").unwrap(),
            Word::new("crane").unwrap(),
        ];
        let targets = vec![Word::new("crane").unwrap()];
        let catalog = Catalog::new(dictionary, targets);

        assert_eq!(catalog.dictionary_count(), 2);
    }
}
