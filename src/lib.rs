//! Roster Engine for shift scheduling and timesheets.
//!
//! This crate provides the calculation core of a staff rostering and
//! timesheet application: pay period anchoring, scheduled pay with payroll
//! minute rounding, and recurring shift occurrence generation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod store;
