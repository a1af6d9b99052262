//! Daily target selection
//!
//! Maps a calendar date to an index into the target list. The word at index
//! zero is scheduled for the epoch date, the next word for the following day,
//! and so on.

use crate::core::Word;
use crate::wordlists::{Catalog, CatalogError};
use chrono::NaiveDate;

/// The default schedule start: the word at index 0 belongs to this date
///
/// # Panics
/// Will not panic - the date literal is valid.
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid epoch date")
}

/// Whole days elapsed from `epoch` to `on`
///
/// Negative when `on` precedes the epoch. Computed on calendar dates, so the
/// index for a given date is the same no matter when during the day it is
/// asked for.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::game::daily::{day_index, default_epoch};
///
/// let launch = default_epoch();
/// assert_eq!(day_index(launch, launch), 0);
///
/// let later = NaiveDate::from_ymd_opt(2022, 1, 31).unwrap();
/// assert_eq!(day_index(later, launch), 30);
/// ```
#[must_use]
pub fn day_index(on: NaiveDate, epoch: NaiveDate) -> i64 {
    on.signed_duration_since(epoch).num_days()
}

/// Get the target word scheduled for `on`
///
/// # Errors
/// Returns `CatalogError::IndexOutOfRange` when `on` precedes the epoch or
/// falls past the end of the target list.
pub fn target_for_date<'a>(
    catalog: &'a Catalog,
    on: NaiveDate,
    epoch: NaiveDate,
) -> Result<&'a Word, CatalogError> {
    catalog.target_for_index(day_index(on, epoch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup_catalog() -> Catalog {
        let targets = vec![
            Word::new("crane").unwrap(),
            Word::new("pilot").unwrap(),
            Word::new("gloom").unwrap(),
        ];
        Catalog::new(Vec::new(), targets)
    }

    #[test]
    fn day_index_at_epoch_is_zero() {
        let epoch = default_epoch();
        assert_eq!(day_index(epoch, epoch), 0);
    }

    #[test]
    fn day_index_counts_whole_days() {
        let epoch = default_epoch();
        assert_eq!(day_index(date(2022, 1, 2), epoch), 1);
        assert_eq!(day_index(date(2022, 2, 1), epoch), 31);
        assert_eq!(day_index(date(2023, 1, 1), epoch), 365);
    }

    #[test]
    fn day_index_spans_leap_day() {
        // 2024 is a leap year: 2022 + 2023 + 2024 = 365 + 365 + 366
        let epoch = default_epoch();
        assert_eq!(day_index(date(2025, 1, 1), epoch), 1096);
    }

    #[test]
    fn day_index_negative_before_epoch() {
        let epoch = default_epoch();
        assert_eq!(day_index(date(2021, 12, 31), epoch), -1);
    }

    #[test]
    fn day_index_monotonic_and_stable() {
        let epoch = default_epoch();
        let mut previous = i64::MIN;

        for day in 1..=28 {
            let on = date(2022, 3, day);
            let index = day_index(on, epoch);
            assert!(index > previous);
            assert_eq!(index, day_index(on, epoch));
            previous = index;
        }
    }

    #[test]
    fn target_for_date_follows_schedule() {
        let catalog = setup_catalog();
        let epoch = date(2022, 1, 1);

        assert_eq!(
            target_for_date(&catalog, date(2022, 1, 1), epoch)
                .unwrap()
                .text(),
            "crane"
        );
        assert_eq!(
            target_for_date(&catalog, date(2022, 1, 3), epoch)
                .unwrap()
                .text(),
            "gloom"
        );
    }

    #[test]
    fn target_for_date_before_epoch_fails() {
        let catalog = setup_catalog();
        let epoch = date(2022, 1, 1);

        assert!(matches!(
            target_for_date(&catalog, date(2021, 6, 1), epoch),
            Err(CatalogError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn target_for_date_past_schedule_fails() {
        let catalog = setup_catalog();
        let epoch = date(2022, 1, 1);

        assert_eq!(
            target_for_date(&catalog, date(2022, 1, 4), epoch),
            Err(CatalogError::IndexOutOfRange {
                index: 3,
                available: 3
            })
        );
    }
}
