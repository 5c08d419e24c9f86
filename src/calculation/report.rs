//! Period report aggregation.
//!
//! Totals for a reporting period are accumulated as exact values and only
//! rounded for display at the presentation boundary. Rounding each
//! shift's dollar amount to cents before summing would compound error
//! across a period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftSchedule;

use super::scheduled_pay::{scheduled_minutes, scheduled_pay};

/// Aggregated scheduled time and pay for a set of shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// The number of shifts that contributed paid time.
    pub shift_count: usize,
    /// Total paid minutes across all shifts, after per-shift rounding.
    pub paid_minutes: i64,
    /// Total gross pay as an exact decimal; round for display only.
    pub gross_pay: Decimal,
}

/// Sums scheduled minutes and pay across `shifts`.
///
/// Cancelled and not-yet-schedulable shifts contribute zero and are not
/// counted in `shift_count`.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::period_totals;
///
/// let totals = period_totals(&[]);
/// assert_eq!(totals.shift_count, 0);
/// assert_eq!(totals.paid_minutes, 0);
/// ```
pub fn period_totals(shifts: &[ShiftSchedule]) -> PeriodTotals {
    let mut totals = PeriodTotals {
        shift_count: 0,
        paid_minutes: 0,
        gross_pay: Decimal::ZERO,
    };

    for shift in shifts {
        let minutes = scheduled_minutes(shift);
        if minutes == 0 {
            continue;
        }
        totals.shift_count += 1;
        totals.paid_minutes += minutes;
        totals.gross_pay += scheduled_pay(shift);
    }

    totals
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

    fn make_shift(id: &str, end_minute: u32, rate: &str) -> ShiftSchedule {
        ShiftSchedule {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end_date: None,
            start_time: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            end_time: Some(NaiveTime::from_hms_opt(17, end_minute, 0).unwrap()),
            break_minutes: 0,
            break_is_paid: false,
            hourly_rate: dec(rate),
            track_time: true,
            status: ShiftStatus::Scheduled,
        }
    }

    #[test]
    fn test_empty_input_yields_zero_totals() {
        let totals = period_totals(&[]);
        assert_eq!(totals.shift_count, 0);
        assert_eq!(totals.paid_minutes, 0);
        assert_eq!(totals.gross_pay, Decimal::ZERO);
    }

    #[test]
    fn test_totals_sum_minutes_and_pay() {
        let shifts = vec![
            make_shift("a", 0, "20.00"),  // 480 min, $160
            make_shift("b", 30, "20.00"), // 510 min, $170
        ];
        let totals = period_totals(&shifts);
        assert_eq!(totals.shift_count, 2);
        assert_eq!(totals.paid_minutes, 990);
        assert_eq!(totals.gross_pay, dec("330.00"));
    }

    #[test]
    fn test_cancelled_shifts_are_excluded() {
        let mut cancelled = make_shift("c", 0, "20.00");
        cancelled.status = ShiftStatus::Cancelled;
        let shifts = vec![make_shift("a", 0, "20.00"), cancelled];

        let totals = period_totals(&shifts);
        assert_eq!(totals.shift_count, 1);
        assert_eq!(totals.paid_minutes, 480);
    }

    #[test]
    fn test_sum_before_display_rounding_does_not_lose_cents() {
        // 90 minutes at $20.33/hr is $30.495 per shift. Summing 10 exact
        // amounts gives $304.95; rounding each to cents first would give
        // $305.00.
        let shifts: Vec<ShiftSchedule> = (0..10)
            .map(|i| {
                let mut shift = make_shift(&format!("s{}", i), 0, "20.33");
                shift.end_time = Some(NaiveTime::from_hms_opt(10, 30, 0).unwrap());
                shift
            })
            .collect();

        let totals = period_totals(&shifts);
        assert_eq!(totals.paid_minutes, 900);
        assert_eq!(totals.gross_pay, dec("304.95"));
        assert_eq!(totals.gross_pay.round_dp(2), dec("304.95"));
    }

    #[test]
    fn test_totals_serialization() {
        let totals = period_totals(&[make_shift("a", 0, "20.00")]);
        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"shift_count\":1"));
        assert!(json.contains("\"paid_minutes\":480"));
    }
}
