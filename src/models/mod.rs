//! Core data models for the Roster Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod frequency;
mod pay_period;
mod series;
mod shift;

pub use frequency::PayFrequency;
pub use pay_period::PayPeriod;
pub use series::{Assignment, RecurringSeries, ShiftOccurrence};
pub use shift::{ShiftSchedule, ShiftStatus};
