//! Collaborator store interfaces.
//!
//! The engine consumes persistence through narrow trait objects so the
//! recurrence logic never depends on a concrete backend. Reads that can
//! legitimately find nothing return `EngineResult<Option<T>>`: found,
//! not-found, and failure stay distinguishable.
//!
//! The tick's duplicate guard is a best-effort check-then-insert; a
//! deployment that cannot tolerate a rare duplicate should enforce a
//! uniqueness constraint on `(recurring_group_id, date)` in the backing
//! store and treat the application-level check as an optimization.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{Assignment, RecurringSeries, ShiftOccurrence};

/// Persistence interface for shift occurrence records.
pub trait ShiftStore: Send + Sync {
    /// Inserts a new occurrence and returns it with its assigned id.
    fn create(&self, occurrence: &ShiftOccurrence) -> EngineResult<ShiftOccurrence>;

    /// Returns the latest non-cancelled occurrence for a series by date,
    /// or `None` if the series has no occurrences yet.
    fn latest_occurrence(&self, series_id: &str) -> EngineResult<Option<ShiftOccurrence>>;

    /// Returns true if any occurrence (of any status) exists for the
    /// series on the given date.
    fn occurrence_exists(&self, series_id: &str, date: NaiveDate) -> EngineResult<bool>;

    /// Cancels every occurrence of the series dated `from` or later.
    /// Returns the number of occurrences cancelled.
    fn cancel_from(&self, series_id: &str, from: NaiveDate) -> EngineResult<usize>;

    /// Returns all occurrences for a series, ordered by date ascending.
    fn occurrences_for_series(&self, series_id: &str) -> EngineResult<Vec<ShiftOccurrence>>;
}

/// Persistence interface for shift assignments.
pub trait AssignmentStore: Send + Sync {
    /// Assigns an employee to a shift.
    fn create(&self, shift_id: &str, employee_id: &str) -> EngineResult<Assignment>;
}

/// Persistence interface for recurring series records.
pub trait SeriesStore: Send + Sync {
    /// Inserts a new series.
    fn create(&self, series: &RecurringSeries) -> EngineResult<()>;

    /// Fetches a series by id; `None` if it does not exist.
    fn get(&self, series_id: &str) -> EngineResult<Option<RecurringSeries>>;

    /// Replaces the stored series with the given value.
    fn update(&self, series: &RecurringSeries) -> EngineResult<()>;

    /// Returns the active, open-ended series for an organization — the
    /// population the tick operation processes.
    fn active_open_ended(&self, organization_id: &str) -> EngineResult<Vec<RecurringSeries>>;
}
