//! In-memory store implementation.
//!
//! Backs the test suite, the benchmarks, and the API facade's default
//! state. Unlike the best-effort application-level duplicate guard, this
//! implementation enforces uniqueness on `(recurring_group_id, date)` at
//! insert time, the way a production backing store should.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Assignment, RecurringSeries, ShiftOccurrence, ShiftStatus};

use super::{AssignmentStore, SeriesStore, ShiftStore};

/// An in-memory implementation of all three store interfaces.
///
/// # Example
///
/// ```
/// use roster_engine::store::{MemoryStore, SeriesStore};
///
/// let store = MemoryStore::new();
/// assert!(store.get("missing").unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    shifts: Mutex<Vec<ShiftOccurrence>>,
    assignments: Mutex<Vec<Assignment>>,
    series: Mutex<HashMap<String, RecurringSeries>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_error(operation: &str) -> EngineError {
        EngineError::StoreError {
            operation: operation.to_string(),
            message: "store lock poisoned".to_string(),
        }
    }
}

impl ShiftStore for MemoryStore {
    fn create(&self, occurrence: &ShiftOccurrence) -> EngineResult<ShiftOccurrence> {
        let mut shifts = self
            .shifts
            .lock()
            .map_err(|_| Self::lock_error("shift.create"))?;

        // The real uniqueness guard lives at the storage layer
        let duplicate = shifts.iter().any(|s| {
            s.recurring_group_id == occurrence.recurring_group_id && s.date == occurrence.date
        });
        if duplicate {
            return Err(EngineError::StoreError {
                operation: "shift.create".to_string(),
                message: format!(
                    "occurrence already exists for series '{}' on {}",
                    occurrence.recurring_group_id, occurrence.date
                ),
            });
        }

        let mut created = occurrence.clone();
        created.id = Uuid::new_v4().to_string();
        shifts.push(created.clone());
        Ok(created)
    }

    fn latest_occurrence(&self, series_id: &str) -> EngineResult<Option<ShiftOccurrence>> {
        let shifts = self
            .shifts
            .lock()
            .map_err(|_| Self::lock_error("shift.latest_occurrence"))?;
        Ok(shifts
            .iter()
            .filter(|s| s.recurring_group_id == series_id && s.status != ShiftStatus::Cancelled)
            .max_by_key(|s| s.date)
            .cloned())
    }

    fn occurrence_exists(&self, series_id: &str, date: NaiveDate) -> EngineResult<bool> {
        let shifts = self
            .shifts
            .lock()
            .map_err(|_| Self::lock_error("shift.occurrence_exists"))?;
        Ok(shifts
            .iter()
            .any(|s| s.recurring_group_id == series_id && s.date == date))
    }

    fn cancel_from(&self, series_id: &str, from: NaiveDate) -> EngineResult<usize> {
        let mut shifts = self
            .shifts
            .lock()
            .map_err(|_| Self::lock_error("shift.cancel_from"))?;
        let mut cancelled = 0;
        for shift in shifts.iter_mut() {
            if shift.recurring_group_id == series_id
                && shift.date >= from
                && shift.status != ShiftStatus::Cancelled
            {
                shift.status = ShiftStatus::Cancelled;
                cancelled += 1;
            }
        }
        Ok(cancelled)
    }

    fn occurrences_for_series(&self, series_id: &str) -> EngineResult<Vec<ShiftOccurrence>> {
        let shifts = self
            .shifts
            .lock()
            .map_err(|_| Self::lock_error("shift.occurrences_for_series"))?;
        let mut result: Vec<ShiftOccurrence> = shifts
            .iter()
            .filter(|s| s.recurring_group_id == series_id)
            .cloned()
            .collect();
        result.sort_by_key(|s| s.date);
        Ok(result)
    }
}

impl AssignmentStore for MemoryStore {
    fn create(&self, shift_id: &str, employee_id: &str) -> EngineResult<Assignment> {
        let mut assignments = self
            .assignments
            .lock()
            .map_err(|_| Self::lock_error("assignment.create"))?;
        let assignment = Assignment {
            id: Uuid::new_v4().to_string(),
            shift_id: shift_id.to_string(),
            employee_id: employee_id.to_string(),
        };
        assignments.push(assignment.clone());
        Ok(assignment)
    }
}

impl SeriesStore for MemoryStore {
    fn create(&self, series: &RecurringSeries) -> EngineResult<()> {
        let mut map = self
            .series
            .lock()
            .map_err(|_| Self::lock_error("series.create"))?;
        map.insert(series.id.clone(), series.clone());
        Ok(())
    }

    fn get(&self, series_id: &str) -> EngineResult<Option<RecurringSeries>> {
        let map = self
            .series
            .lock()
            .map_err(|_| Self::lock_error("series.get"))?;
        Ok(map.get(series_id).cloned())
    }

    fn update(&self, series: &RecurringSeries) -> EngineResult<()> {
        let mut map = self
            .series
            .lock()
            .map_err(|_| Self::lock_error("series.update"))?;
        if !map.contains_key(&series.id) {
            return Err(EngineError::SeriesNotFound {
                series_id: series.id.clone(),
            });
        }
        map.insert(series.id.clone(), series.clone());
        Ok(())
    }

    fn active_open_ended(&self, organization_id: &str) -> EngineResult<Vec<RecurringSeries>> {
        let map = self
            .series
            .lock()
            .map_err(|_| Self::lock_error("series.active_open_ended"))?;
        let mut result: Vec<RecurringSeries> = map
            .values()
            .filter(|s| s.organization_id == organization_id && s.is_open_ended())
            .cloned()
            .collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(result)
    }
}
