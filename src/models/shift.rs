//! Shift schedule model and related types.
//!
//! This module defines the ShiftSchedule struct and ShiftStatus enum for
//! representing planned shifts in the rostering system.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the lifecycle status of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// The shift has been created but not yet confirmed by the employee.
    Scheduled,
    /// The employee has confirmed they will work the shift.
    Confirmed,
    /// The shift has been worked.
    Completed,
    /// The shift was cancelled; it contributes zero pay.
    Cancelled,
}

/// Represents a planned work shift with timing and pay configuration.
///
/// Timing fields are optional: a shift whose start or end time has not
/// been entered yet is "not yet schedulable" and yields zero scheduled
/// minutes rather than an error.
///
/// # Example
///
/// ```
/// use roster_engine::models::{ShiftSchedule, ShiftStatus};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftSchedule {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     end_date: None,
///     start_time: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
///     end_time: Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
///     break_minutes: 30,
///     break_is_paid: false,
///     hourly_rate: Decimal::new(2000, 2), // 20.00
///     track_time: true,
///     status: ShiftStatus::Scheduled,
/// };
/// assert_eq!(shift.raw_minutes(), Some(480));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSchedule {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// The date the shift ends on; defaults to `date` for same-day shifts.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The scheduled start time, if entered.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The scheduled end time, if entered.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Length of the break in minutes.
    #[serde(default)]
    pub break_minutes: i64,
    /// Whether the break is paid (paid breaks do not reduce paid time).
    #[serde(default)]
    pub break_is_paid: bool,
    /// The hourly rate for this shift.
    pub hourly_rate: Decimal,
    /// Whether clock-in/out time tracking is enabled for this shift.
    #[serde(default)]
    pub track_time: bool,
    /// The lifecycle status of the shift.
    pub status: ShiftStatus,
}

impl ShiftSchedule {
    /// Returns the scheduled start as a full timestamp, if a start time
    /// has been entered.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.start_time.map(|t| self.date.and_time(t))
    }

    /// Returns the scheduled end as a full timestamp, if an end time has
    /// been entered. Overnight shifts carry their end on `end_date`.
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.end_time
            .map(|t| self.end_date.unwrap_or(self.date).and_time(t))
    }

    /// Returns the raw elapsed minutes between the scheduled start and end,
    /// before break deduction and rounding.
    ///
    /// Returns `None` when either timestamp is missing. A non-positive
    /// duration is returned as-is; callers treat it as zero.
    pub fn raw_minutes(&self) -> Option<i64> {
        let start = self.starts_at()?;
        let end = self.ends_at()?;
        Some((end - start).num_minutes())
    }

    /// Returns true if the shift was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.status == ShiftStatus::Cancelled
    }
}
