//! Pay period calculation.
//!
//! This module computes the canonical pay period containing a given
//! calendar date for each supported frequency. Weekly periods run Monday
//! to Sunday. Fortnightly periods are stable 14-day blocks anchored at
//! the fixed reference Monday 2024-01-01, so the same date always lands
//! in the same block no matter which weekday "today" is. Monthly periods
//! span the calendar month.
//!
//! All arithmetic is whole-day arithmetic on calendar dates; no
//! millisecond differences across local midnights are involved, so DST
//! transitions cannot produce a 13- or 15-day fortnight.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{PayFrequency, PayPeriod};

use super::date_utils::{PERIOD_ANCHOR, last_day_of_month, monday_of_week};

/// Computes the pay period containing `today` for the given frequency.
///
/// Repeated calls with any date inside the same period return the
/// identical period, and consecutive periods tile the calendar with no
/// gaps or overlaps.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::current_period;
/// use roster_engine::models::PayFrequency;
/// use chrono::NaiveDate;
///
/// // 2024-03-07 is a Thursday in the fortnight starting 2024-02-26
/// let today = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// let period = current_period(today, PayFrequency::Fortnightly);
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
/// assert_eq!(period.length_days(), 14);
/// ```
pub fn current_period(today: NaiveDate, frequency: PayFrequency) -> PayPeriod {
    match frequency {
        PayFrequency::Weekly => {
            let start = monday_of_week(today);
            PayPeriod {
                start_date: start,
                end_date: start + Days::new(6),
                frequency,
            }
        }
        PayFrequency::Fortnightly => {
            let monday = monday_of_week(today);
            // Euclidean division keeps blocks stable for dates before the
            // anchor as well
            let fortnight_index = (monday - PERIOD_ANCHOR).num_days().div_euclid(14);
            let start = if fortnight_index >= 0 {
                PERIOD_ANCHOR + Days::new(fortnight_index as u64 * 14)
            } else {
                PERIOD_ANCHOR - Days::new(fortnight_index.unsigned_abs() * 14)
            };
            PayPeriod {
                start_date: start,
                end_date: start + Days::new(13),
                frequency,
            }
        }
        PayFrequency::Monthly => {
            let start = today.with_day(1).unwrap_or(today);
            PayPeriod {
                start_date: start,
                end_date: last_day_of_month(today),
                frequency,
            }
        }
    }
}

/// Computes the period `offset` steps away from the one containing
/// `today`.
///
/// An offset of 0 is the current period; -1 is the previous period and 1
/// the next. Reporting screens use this to page backwards through payroll
/// history.
pub fn period_for_offset(today: NaiveDate, frequency: PayFrequency, offset: i32) -> PayPeriod {
    // Step one period at a time; the day after an end date is always
    // inside the next period, and the day before a start date inside the
    // previous one
    let mut period = current_period(today, frequency);
    for _ in 0..offset.unsigned_abs() {
        period = if offset > 0 {
            current_period(period.end_date + Days::new(1), frequency)
        } else {
            current_period(period.start_date - Days::new(1), frequency)
        };
    }
    period
}
