//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type describing the date range
//! over which scheduled time is aggregated for payroll.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PayFrequency;

/// Represents one pay period: an inclusive date range plus the frequency
/// that produced it.
///
/// Periods for a given frequency tile the calendar with no gaps or
/// overlaps. Weekly and fortnightly periods always start on a Monday;
/// monthly periods span a full calendar month.
///
/// # Example
///
/// ```
/// use roster_engine::models::{PayFrequency, PayPeriod};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
///     frequency: PayFrequency::Fortnightly,
/// };
///
/// assert_eq!(period.length_days(), 14);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// The frequency that produced this period.
    pub frequency: PayFrequency,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days in this period, counting both
    /// endpoints.
    pub fn length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns the human-readable frequency label (e.g., "Fortnightly").
    pub fn label(&self) -> &'static str {
        self.frequency.label()
    }
}
