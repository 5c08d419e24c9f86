//! Calendar date utilities.
//!
//! All period arithmetic in the engine is performed in whole calendar
//! days on [`NaiveDate`] values. Day counts never pass through local
//! timestamps, so a 23- or 25-hour day at a DST transition cannot distort
//! a period boundary.

use chrono::{Datelike, Days, NaiveDate, NaiveTime};

use crate::error::{EngineError, EngineResult};

/// The fixed reference Monday that weekly and fortnightly periods are
/// anchored to: 2024-01-01.
pub const PERIOD_ANCHOR: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(d) => d,
    None => unreachable!(),
};

/// Returns the signed number of whole days from [`PERIOD_ANCHOR`] to
/// `date`.
///
/// Negative for dates before the anchor.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::days_since_anchor;
/// use chrono::NaiveDate;
///
/// assert_eq!(days_since_anchor(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 0);
/// assert_eq!(days_since_anchor(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()), 14);
/// assert_eq!(days_since_anchor(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()), -1);
/// ```
pub fn days_since_anchor(date: NaiveDate) -> i64 {
    (date - PERIOD_ANCHOR).num_days()
}

/// Returns the Monday of the ISO week containing `date`.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::monday_of_week;
/// use chrono::NaiveDate;
///
/// // 2024-03-07 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(monday_of_week(thursday), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
/// ```
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Returns the last calendar day of the month containing `date`,
/// including 29 February in leap years.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // First of the following month always exists
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or(PERIOD_ANCHOR);
    first_of_next - Days::new(1)
}

/// Returns the ISO weekday number of `date`: 1 (Monday) through 7
/// (Sunday).
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Parses a `YYYY-MM-DD` calendar date string at the external-data
/// boundary.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses a `HH:MM` or `HH:MM:SS` time string at the external-data
/// boundary.
pub fn parse_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| EngineError::InvalidTime {
            value: value.to_string(),
        })
}
