//! Scheduled pay calculation.
//!
//! This module computes paid minutes and pay from a shift's planned
//! timing, as opposed to pay computed from actual clock-in/out stamps.
//! Break handling and the half-hour payroll rounding policy live here.

use rust_decimal::Decimal;

use crate::models::ShiftSchedule;

/// Shifts at or below this many break-adjusted minutes are treated as no
/// shift worked. Guards against accidental near-zero durations from
/// half-entered forms.
pub const MINIMUM_BILLABLE_MINUTES: i64 = 19;

/// Applies the payroll rounding policy to a minute count.
///
/// The minutes-past-the-hour remainder is snapped to the nearest half
/// hour: 0–19 rounds down to the hour, 20–44 rounds to the half hour, and
/// 45–59 rounds up to the next hour. Totals at or below
/// [`MINIMUM_BILLABLE_MINUTES`] round to zero outright.
///
/// The same policy applies to scheduled time here and to actual clocked
/// time in the timesheet screens, so it is exported on its own.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::round_to_half_hour;
///
/// assert_eq!(round_to_half_hour(450), 450); // already on a half hour
/// assert_eq!(round_to_half_hour(490), 480); // :10 rounds down
/// assert_eq!(round_to_half_hour(505), 510); // :25 rounds to the half
/// assert_eq!(round_to_half_hour(465), 480); // :45 rounds up
/// assert_eq!(round_to_half_hour(15), 0);    // below the minimum
/// ```
pub fn round_to_half_hour(minutes: i64) -> i64 {
    if minutes <= MINIMUM_BILLABLE_MINUTES {
        return 0;
    }
    let remainder = minutes % 60;
    let rounded_remainder = if remainder <= 19 {
        0
    } else if remainder <= 44 {
        30
    } else {
        60
    };
    (minutes / 60) * 60 + rounded_remainder
}

/// Computes the paid minutes for a shift's scheduled window.
///
/// Returns 0 (not an error) when the shift is cancelled, when either
/// timestamp is missing, or when the elapsed duration is non-positive —
/// such shifts are "not yet schedulable". Unpaid breaks are deducted
/// before rounding; paid breaks do not reduce paid time.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::scheduled_minutes;
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
///     hourly_rate: Decimal::new(2000, 2),
///     track_time: true,
///     status: ShiftStatus::Scheduled,
/// };
/// assert_eq!(scheduled_minutes(&shift), 450);
/// ```
pub fn scheduled_minutes(shift: &ShiftSchedule) -> i64 {
    if shift.is_cancelled() {
        return 0;
    }
    let Some(raw) = shift.raw_minutes() else {
        return 0;
    };
    if raw <= 0 {
        return 0;
    }
    let adjusted = if shift.break_is_paid {
        raw
    } else {
        raw - shift.break_minutes
    };
    round_to_half_hour(adjusted)
}

/// Computes the pay for a shift's scheduled window.
///
/// Pay is paid minutes divided by 60 times the hourly rate, in exact
/// decimal arithmetic. Display rounding to 2 decimals happens at the
/// presentation boundary, never here, so accumulating many shifts in a
/// report cannot compound rounding error.
pub fn scheduled_pay(shift: &ShiftSchedule) -> Decimal {
    let minutes = scheduled_minutes(shift);
    Decimal::from(minutes) / Decimal::from(60) * shift.hourly_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftStatus;
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_shift(
        start: (u32, u32),
        end: (u32, u32),
        break_minutes: i64,
        break_is_paid: bool,
    ) -> ShiftSchedule {
        ShiftSchedule {
            id: "shift_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end_date: None,
            start_time: Some(NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap()),
            end_time: Some(NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap()),
            break_minutes,
            break_is_paid,
            hourly_rate: dec("20.00"),
            track_time: true,
            status: ShiftStatus::Scheduled,
        }
    }

    // ---- rounding policy ----

    #[test]
    fn test_round_remainder_at_or_below_19_drops_to_hour() {
        assert_eq!(round_to_half_hour(480), 480);
        assert_eq!(round_to_half_hour(490), 480);
        assert_eq!(round_to_half_hour(499), 480);
    }

    #[test]
    fn test_round_remainder_20_to_44_snaps_to_half_hour() {
        assert_eq!(round_to_half_hour(500), 510);
        assert_eq!(round_to_half_hour(510), 510);
        assert_eq!(round_to_half_hour(524), 510);
    }

    #[test]
    fn test_round_remainder_45_and_up_rounds_to_next_hour() {
        assert_eq!(round_to_half_hour(525), 540);
        assert_eq!(round_to_half_hour(539), 540);
    }

    #[test]
    fn test_round_short_totals_drop_to_zero() {
        assert_eq!(round_to_half_hour(0), 0);
        assert_eq!(round_to_half_hour(15), 0);
        assert_eq!(round_to_half_hour(19), 0);
        assert_eq!(round_to_half_hour(-30), 0);
    }

    #[test]
    fn test_round_just_above_minimum_snaps_to_half_hour() {
        assert_eq!(round_to_half_hour(20), 30);
    }

    // ---- scheduled minutes ----

    /// SP-001: 9:00–17:00 with 30 min unpaid break = 450 minutes
    #[test]
    fn test_eight_hour_shift_with_unpaid_break() {
        let shift = make_shift((9, 0), (17, 0), 30, false);
        assert_eq!(scheduled_minutes(&shift), 450);
        assert_eq!(scheduled_pay(&shift), dec("150.00"));
    }

    /// SP-002: 9:00–17:10 with no break rounds :10 down to 480
    #[test]
    fn test_ten_minute_overhang_rounds_down() {
        let shift = make_shift((9, 0), (17, 10), 0, false);
        assert_eq!(scheduled_minutes(&shift), 480);
        assert_eq!(scheduled_pay(&shift), dec("160.00"));
    }

    /// SP-003: a 15-minute shift yields zero minutes and zero pay
    #[test]
    fn test_fifteen_minute_shift_yields_zero() {
        let shift = make_shift((9, 0), (9, 15), 0, false);
        assert_eq!(scheduled_minutes(&shift), 0);
        assert_eq!(scheduled_pay(&shift), Decimal::ZERO);
    }

    /// SP-004: cancelled shifts always yield zero
    #[test]
    fn test_cancelled_shift_yields_zero() {
        let mut shift = make_shift((9, 0), (17, 0), 0, false);
        shift.status = ShiftStatus::Cancelled;
        assert_eq!(scheduled_minutes(&shift), 0);
        assert_eq!(scheduled_pay(&shift), Decimal::ZERO);
    }

    #[test]
    fn test_paid_break_does_not_reduce_minutes() {
        let shift = make_shift((9, 0), (17, 0), 30, true);
        assert_eq!(scheduled_minutes(&shift), 480);
        assert_eq!(scheduled_pay(&shift), dec("160.00"));
    }

    #[test]
    fn test_missing_times_yield_zero() {
        let mut shift = make_shift((9, 0), (17, 0), 0, false);
        shift.start_time = None;
        assert_eq!(scheduled_minutes(&shift), 0);

        let mut shift = make_shift((9, 0), (17, 0), 0, false);
        shift.end_time = None;
        assert_eq!(scheduled_minutes(&shift), 0);
    }

    #[test]
    fn test_end_before_start_yields_zero() {
        let shift = make_shift((17, 0), (9, 0), 0, false);
        assert_eq!(scheduled_minutes(&shift), 0);
    }

    #[test]
    fn test_break_longer_than_shift_yields_zero() {
        let shift = make_shift((9, 0), (9, 30), 45, false);
        assert_eq!(scheduled_minutes(&shift), 0);
    }

    #[test]
    fn test_overnight_shift_minutes() {
        let mut shift = make_shift((22, 0), (6, 0), 0, false);
        shift.end_date = Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(scheduled_minutes(&shift), 480);
    }

    #[test]
    fn test_pay_uses_exact_decimal_arithmetic() {
        // 450 minutes at $23.45 = 7.5 * 23.45 = 175.875 exactly
        let mut shift = make_shift((9, 0), (17, 0), 30, false);
        shift.hourly_rate = dec("23.45");
        assert_eq!(scheduled_pay(&shift), dec("175.875"));
    }
}
