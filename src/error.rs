//! Error types for the Roster Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during roster calculations and
//! recurring shift processing.
//!
//! Store reads that may legitimately find nothing return
//! `EngineResult<Option<T>>` rather than an error: `Ok(Some(_))` is found,
//! `Ok(None)` is not-found, and `Err(_)` is a real failure. The three
//! states are never collapsed into each other.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Roster Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/organization.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Settings file not found: /missing/organization.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Organization settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Organization settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date string did not match the `YYYY-MM-DD` calendar date format.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
    },

    /// A time string did not match the `HH:MM` or `HH:MM:SS` format.
    #[error("Invalid time '{value}': expected HH:MM or HH:MM:SS")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
    },

    /// A shift record was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A recurring series was referenced by an id that does not exist.
    #[error("Recurring series not found: {series_id}")]
    SeriesNotFound {
        /// The series id that was not found.
        series_id: String,
    },

    /// A recurring series contained inconsistent configuration.
    #[error("Invalid series '{series_id}': {message}")]
    InvalidSeries {
        /// The ID of the invalid series.
        series_id: String,
        /// A description of what made the series invalid.
        message: String,
    },

    /// A collaborator store operation failed.
    #[error("Store error during {operation}: {message}")]
    StoreError {
        /// The store operation that failed (e.g., "shift.create").
        operation: String,
        /// A description of the failure.
        message: String,
    },

    /// No occurrence could be generated for a series within its search window.
    #[error("No occurrence date found for series '{series_id}' after {after}")]
    NoOccurrenceFound {
        /// The series that was being ticked.
        series_id: String,
        /// The date after which the search started.
        after: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
