//! Occurrence date enumeration.
//!
//! Pure, restartable enumeration of the dates a weekday set produces.
//! Two boundary conventions coexist deliberately: [`occurrences_between`]
//! includes `from_date` itself when it matches (the UI lists a window
//! starting at a chosen date), while [`next_occurrence_after`] searches
//! strictly after its argument (the tick advances past the last existing
//! occurrence).

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};

use super::tick::SEARCH_WINDOW_DAYS;

/// How far ahead enumeration looks when no explicit end date is given:
/// two years.
pub const DEFAULT_HORIZON_DAYS: u64 = 730;

/// Enumerates ascending occurrence dates for a weekday set.
///
/// Dates start at `from_date` inclusive and run up to and including
/// `to_date` when given, otherwise up to [`DEFAULT_HORIZON_DAYS`] past
/// `from_date`. At most `limit` dates are returned. An empty weekday set
/// produces an empty list.
///
/// Weekdays are ISO numbers: 1 (Monday) through 7 (Sunday).
///
/// # Examples
///
/// ```
/// use roster_engine::recurrence::occurrences_between;
/// use std::collections::BTreeSet;
/// use chrono::NaiveDate;
///
/// // Mondays, Wednesdays and Fridays over the first two weeks of 2024
/// let weekdays = BTreeSet::from([1, 3, 5]);
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); // a Monday
/// let to = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
/// let dates = occurrences_between(&weekdays, from, Some(to), 100);
/// assert_eq!(dates.len(), 6);
/// assert_eq!(dates[0], from);
/// ```
pub fn occurrences_between(
    weekdays: &BTreeSet<u32>,
    from_date: NaiveDate,
    to_date: Option<NaiveDate>,
    limit: usize,
) -> Vec<NaiveDate> {
    if weekdays.is_empty() || limit == 0 {
        return Vec::new();
    }

    let horizon = to_date.unwrap_or(from_date + Days::new(DEFAULT_HORIZON_DAYS));
    let mut dates = Vec::new();
    let mut day = from_date;
    while day <= horizon && dates.len() < limit {
        if weekdays.contains(&day.weekday().number_from_monday()) {
            dates.push(day);
        }
        day = day + Days::new(1);
    }
    dates
}

/// Finds the next date strictly after `after` whose weekday is in the
/// set, searching a fixed 14-day window.
///
/// Any non-empty weekday set recurs within 7 days, so the window is a
/// defensive bound rather than a real limit; `None` means the set was
/// empty or inconsistent.
///
/// # Examples
///
/// ```
/// use roster_engine::recurrence::next_occurrence_after;
/// use std::collections::BTreeSet;
/// use chrono::NaiveDate;
///
/// let weekdays = BTreeSet::from([1]); // Mondays only
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(
///     next_occurrence_after(&weekdays, monday),
///     NaiveDate::from_ymd_opt(2024, 1, 8)
/// );
/// ```
pub fn next_occurrence_after(weekdays: &BTreeSet<u32>, after: NaiveDate) -> Option<NaiveDate> {
    for offset in 1..=SEARCH_WINDOW_DAYS {
        let candidate = after + Days::new(offset);
        if weekdays.contains(&candidate.weekday().number_from_monday()) {
            return Some(candidate);
        }
    }
    None
}
