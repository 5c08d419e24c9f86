//! Recurring shift occurrence generation.
//!
//! This module contains the occurrence enumerator, the idempotent tick
//! that materializes the next occurrence of each open-ended series, and
//! the series lifecycle operations exposed to managers.

mod lifecycle;
mod occurrences;
mod tick;

pub use lifecycle::{clear_end_date, deactivate, set_end_date};
pub use occurrences::{
    DEFAULT_HORIZON_DAYS, next_occurrence_after, occurrences_between,
};
pub use tick::{
    LOOKAHEAD_HOURS, SEARCH_WINDOW_DAYS, TickDiagnostic, TickOutcome, TickReport, tick_all,
    tick_series,
};
