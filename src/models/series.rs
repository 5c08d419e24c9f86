//! Recurring series and occurrence models.
//!
//! This module defines the RecurringSeries template, the ShiftOccurrence
//! rows generated from it, and the Assignment linking an occurrence to an
//! employee.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ShiftSchedule, ShiftStatus};

/// A recurring shift series: the reusable template plus recurrence rule
/// that concrete occurrences are generated from.
///
/// The series owns its template data. Generated occurrences are
/// independent records that reference the series by id only, so ending or
/// deactivating a series never cascades to occurrences that were already
/// worked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringSeries {
    /// Unique identifier for the series.
    pub id: String,
    /// The organization this series belongs to.
    pub organization_id: String,
    /// Weekdays the series recurs on: 1 (Monday) through 7 (Sunday).
    pub weekdays: BTreeSet<u32>,
    /// The first date the series can generate occurrences for.
    pub start_date: NaiveDate,
    /// The last date the series generates occurrences for; `None` means
    /// the series is ongoing.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Whether the series is still generating occurrences.
    pub is_active: bool,
    /// Template: shift title shown on the roster.
    pub title: String,
    /// Template: location label, if any.
    #[serde(default)]
    pub location: Option<String>,
    /// Template: hourly rate for generated occurrences.
    pub hourly_rate: Decimal,
    /// Template: break length in minutes.
    #[serde(default)]
    pub break_minutes: i64,
    /// Template: whether the break is paid.
    #[serde(default)]
    pub break_is_paid: bool,
    /// Template: whether clock-in/out tracking is enabled.
    #[serde(default)]
    pub track_time: bool,
    /// Template: scheduled start time for generated occurrences.
    pub default_start_time: NaiveTime,
    /// Template: scheduled end time for generated occurrences.
    pub default_end_time: NaiveTime,
    /// Employee automatically assigned to new occurrences, if any.
    #[serde(default)]
    pub assigned_employee_id: Option<String>,
}

impl RecurringSeries {
    /// Returns true if the series is active and has no end date.
    ///
    /// Only such series are considered by the tick operation.
    pub fn is_open_ended(&self) -> bool {
        self.is_active && self.end_date.is_none()
    }

    /// Returns true if `date`'s weekday is in the series' weekday set.
    pub fn matches_weekday(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;
        self.weekdays.contains(&date.weekday().number_from_monday())
    }
}

/// A concrete shift generated from a recurring series for one date.
///
/// The `recurring_group_id` is a non-owning back-reference: the occurrence
/// remains valid after its series is ended or deactivated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftOccurrence {
    /// Unique identifier for the occurrence.
    pub id: String,
    /// The organization this occurrence belongs to.
    pub organization_id: String,
    /// The series this occurrence was generated from.
    pub recurring_group_id: String,
    /// The date of the occurrence.
    pub date: NaiveDate,
    /// Scheduled start time, copied from the series template.
    pub start_time: NaiveTime,
    /// Scheduled end time, copied from the series template.
    pub end_time: NaiveTime,
    /// Break length in minutes, copied from the series template.
    pub break_minutes: i64,
    /// Whether the break is paid, copied from the series template.
    pub break_is_paid: bool,
    /// Hourly rate, copied from the series template.
    pub hourly_rate: Decimal,
    /// Whether time tracking is enabled, copied from the series template.
    pub track_time: bool,
    /// Shift title, copied from the series template.
    pub title: String,
    /// Location label, copied from the series template.
    pub location: Option<String>,
    /// The lifecycle status of the occurrence.
    pub status: ShiftStatus,
}

impl ShiftOccurrence {
    /// Builds a new occurrence for `date` by copying the series template.
    ///
    /// The occurrence id is assigned by the store on insert; callers pass
    /// the id the store handed out, or a placeholder for a pending insert.
    pub fn from_series(series: &RecurringSeries, id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            organization_id: series.organization_id.clone(),
            recurring_group_id: series.id.clone(),
            date,
            start_time: series.default_start_time,
            end_time: series.default_end_time,
            break_minutes: series.break_minutes,
            break_is_paid: series.break_is_paid,
            hourly_rate: series.hourly_rate,
            track_time: series.track_time,
            title: series.title.clone(),
            location: series.location.clone(),
            status: ShiftStatus::Scheduled,
        }
    }

    /// Converts this occurrence into a [`ShiftSchedule`] for pay
    /// calculation.
    pub fn to_schedule(&self) -> ShiftSchedule {
        ShiftSchedule {
            id: self.id.clone(),
            date: self.date,
            end_date: None,
            start_time: Some(self.start_time),
            end_time: Some(self.end_time),
            break_minutes: self.break_minutes,
            break_is_paid: self.break_is_paid,
            hourly_rate: self.hourly_rate,
            track_time: self.track_time,
            status: self.status,
        }
    }

    /// Returns the scheduled start of the occurrence as a full timestamp.
    pub fn starts_at(&self) -> chrono::NaiveDateTime {
        self.date.and_time(self.start_time)
    }
}

/// Links a shift occurrence to the employee rostered to work it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier for the assignment.
    pub id: String,
    /// The shift being assigned.
    pub shift_id: String,
    /// The employee assigned to the shift.
    pub employee_id: String,
}
