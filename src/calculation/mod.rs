//! Calculation logic for the Roster Engine.
//!
//! This module contains the pure calculation functions: integer calendar
//! day arithmetic, pay period anchoring for weekly/fortnightly/monthly
//! frequencies, scheduled pay with break handling and payroll minute
//! rounding, and period report aggregation.

mod date_utils;
mod pay_period;
mod report;
mod scheduled_pay;

pub use date_utils::{
    PERIOD_ANCHOR, days_since_anchor, last_day_of_month, monday_of_week, parse_date, parse_time,
    weekday_number,
};
pub use pay_period::{current_period, period_for_offset};
pub use report::{PeriodTotals, period_totals};
pub use scheduled_pay::{
    MINIMUM_BILLABLE_MINUTES, round_to_half_hour, scheduled_minutes, scheduled_pay,
};
