//! Request types for the Roster Engine API.
//!
//! This module defines the JSON request structures for the engine's
//! endpoints. External record shapes are validated here, at the boundary,
//! before they become typed domain values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ShiftSchedule, ShiftStatus};

/// Request body for the `/pay-period` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The date to compute the containing period for.
    pub date: NaiveDate,
    /// Frequency label; omitted or unrecognized values fall back to the
    /// organization default.
    #[serde(default)]
    pub frequency: Option<String>,
    /// Page backwards/forwards this many periods from the one containing
    /// `date`.
    #[serde(default)]
    pub offset: i32,
}

/// Request body for the `/timesheet` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// The shifts to compute scheduled pay for.
    pub shifts: Vec<ShiftRequest>,
}

/// Shift information in a timesheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// The date the shift ends on, for overnight shifts.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The scheduled start time.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The scheduled end time.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Length of the break in minutes.
    #[serde(default)]
    pub break_minutes: i64,
    /// Whether the break is paid.
    #[serde(default)]
    pub break_is_paid: bool,
    /// The hourly rate for this shift.
    pub hourly_rate: Decimal,
    /// Whether clock-in/out tracking is enabled.
    #[serde(default)]
    pub track_time: bool,
    /// The lifecycle status of the shift.
    #[serde(default = "default_status")]
    pub status: ShiftStatus,
}

fn default_status() -> ShiftStatus {
    ShiftStatus::Scheduled
}

impl From<ShiftRequest> for ShiftSchedule {
    fn from(request: ShiftRequest) -> Self {
        ShiftSchedule {
            id: request.id,
            date: request.date,
            end_date: request.end_date,
            start_time: request.start_time,
            end_time: request.end_time,
            break_minutes: request.break_minutes,
            break_is_paid: request.break_is_paid,
            hourly_rate: request.hourly_rate,
            track_time: request.track_time,
            status: request.status,
        }
    }
}

/// Request body for the `/occurrences` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccurrencesRequest {
    /// Weekdays to enumerate: 1 (Monday) through 7 (Sunday).
    pub weekdays: Vec<u32>,
    /// The first date of the enumeration window (inclusive when it
    /// matches a weekday).
    pub from_date: NaiveDate,
    /// The last date of the window, inclusive; omitted means a 2-year
    /// horizon.
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    /// Maximum number of dates to return.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    100
}

/// Request body for the `/tick` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickRequest {
    /// Organization to tick; omitted means the configured organization.
    #[serde(default)]
    pub organization_id: Option<String>,
    /// The instant to evaluate the lookahead against; omitted means the
    /// current UTC time.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_period_request_defaults() {
        let json = r#"{ "date": "2024-03-07" }"#;
        let request: PayPeriodRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.frequency, None);
        assert_eq!(request.offset, 0);
    }

    #[test]
    fn test_shift_request_converts_to_schedule() {
        let json = r#"{
            "id": "shift_001",
            "date": "2024-03-04",
            "start_time": "09:00:00",
            "end_time": "17:00:00",
            "break_minutes": 30,
            "hourly_rate": "20.00"
        }"#;
        let request: ShiftRequest = serde_json::from_str(json).unwrap();
        let schedule: ShiftSchedule = request.into();
        assert_eq!(schedule.status, ShiftStatus::Scheduled);
        assert_eq!(schedule.break_minutes, 30);
        assert!(!schedule.break_is_paid);
    }

    #[test]
    fn test_occurrences_request_default_limit() {
        let json = r#"{ "weekdays": [1, 3], "from_date": "2024-01-01" }"#;
        let request: OccurrencesRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.limit, 100);
        assert_eq!(request.to_date, None);
    }

    #[test]
    fn test_tick_request_fully_defaulted() {
        let request: TickRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.organization_id, None);
        assert_eq!(request.now, None);
    }
}
