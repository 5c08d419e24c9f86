//! Idempotent occurrence materialization.
//!
//! A tick is one invocation of the next-occurrence logic, typically
//! triggered on page load. Ticks are safe to invoke redundantly: the
//! duplicate guard tolerates at-least-once invocation from concurrent
//! page loads, with storage-level uniqueness as the real guard.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{RecurringSeries, ShiftOccurrence};
use crate::store::{AssignmentStore, SeriesStore, ShiftStore};

use super::occurrences::next_occurrence_after;

/// A tick does nothing while the latest occurrence starts more than this
/// many hours in the future, so only one lookahead occurrence exists at a
/// time.
pub const LOOKAHEAD_HOURS: i64 = 24;

/// How many days past the latest occurrence the next-date search runs.
/// A non-empty weekday set recurs within 7 days; the window is a
/// defensive bound.
pub const SEARCH_WINDOW_DAYS: u64 = 14;

/// What a single series' tick did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum TickOutcome {
    /// A new occurrence was created for the given date.
    Created {
        /// The date of the created occurrence.
        date: NaiveDate,
    },
    /// The series has no occurrences yet; seeding is the creation flow's
    /// job, not the tick's.
    NotSeeded,
    /// The latest occurrence is still far enough in the future.
    UpToDate,
    /// An occurrence already existed for the computed date.
    AlreadyExists {
        /// The date that was already covered.
        date: NaiveDate,
    },
    /// The series configuration cannot generate a date (e.g., an empty
    /// weekday set).
    Skipped {
        /// Why the series was skipped.
        reason: String,
    },
}

/// A per-series failure recorded during a batch tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickDiagnostic {
    /// The series whose tick failed.
    pub series_id: String,
    /// A description of the failure.
    pub message: String,
}

/// The result of ticking every active open-ended series for an
/// organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// How many series were examined.
    pub processed: usize,
    /// How many new occurrences were created.
    pub created: usize,
    /// Failures isolated to individual series.
    pub diagnostics: Vec<TickDiagnostic>,
}

/// Ticks a single open-ended series: creates at most one new occurrence.
///
/// The rules, in order:
/// 1. An empty weekday set is skipped — there is nothing to generate.
/// 2. A series with no existing non-cancelled occurrence is left alone
///    ([`TickOutcome::NotSeeded`]).
/// 3. If the latest occurrence starts more than [`LOOKAHEAD_HOURS`] after
///    `now`, nothing happens ([`TickOutcome::UpToDate`]).
/// 4. The next matching weekday strictly after the latest occurrence's
///    date is computed within [`SEARCH_WINDOW_DAYS`].
/// 5. If an occurrence already exists for that date the tick is a no-op
///    ([`TickOutcome::AlreadyExists`]) — this makes repeated ticks from
///    concurrent page loads safe.
/// 6. Otherwise the occurrence is inserted from the series template; a
///    stored default assignee also gets an assignment, and an assignment
///    failure is logged without failing the tick.
pub fn tick_series(
    series: &RecurringSeries,
    shift_store: &dyn ShiftStore,
    assignment_store: &dyn AssignmentStore,
    now: NaiveDateTime,
) -> EngineResult<TickOutcome> {
    if series.weekdays.is_empty() {
        warn!(series_id = %series.id, "Series has an empty weekday set, skipping");
        return Ok(TickOutcome::Skipped {
            reason: "empty weekday set".to_string(),
        });
    }

    let Some(latest) = shift_store.latest_occurrence(&series.id)? else {
        return Ok(TickOutcome::NotSeeded);
    };

    let lookahead_cutoff = now + chrono::Duration::hours(LOOKAHEAD_HOURS);
    if latest.starts_at() > lookahead_cutoff {
        return Ok(TickOutcome::UpToDate);
    }

    let Some(next_date) = next_occurrence_after(&series.weekdays, latest.date) else {
        return Err(EngineError::NoOccurrenceFound {
            series_id: series.id.clone(),
            after: latest.date,
        });
    };

    // Best-effort duplicate guard; the backing store's uniqueness
    // constraint covers the race between check and insert
    if shift_store.occurrence_exists(&series.id, next_date)? {
        return Ok(TickOutcome::AlreadyExists { date: next_date });
    }

    let occurrence = ShiftOccurrence::from_series(series, "pending", next_date);
    let created = shift_store.create(&occurrence)?;
    info!(
        series_id = %series.id,
        shift_id = %created.id,
        date = %next_date,
        "Created recurring shift occurrence"
    );

    if let Some(employee_id) = &series.assigned_employee_id {
        // The occurrence stands on its own even when assignment fails
        if let Err(err) = assignment_store.create(&created.id, employee_id) {
            warn!(
                series_id = %series.id,
                shift_id = %created.id,
                employee_id = %employee_id,
                error = %err,
                "Failed to assign default employee to new occurrence"
            );
        }
    }

    Ok(TickOutcome::Created { date: next_date })
}

/// Ticks every active, open-ended series of an organization.
///
/// Each series' failure is caught, logged, and recorded as a diagnostic;
/// sibling series are processed regardless.
pub fn tick_all(
    series_store: &dyn SeriesStore,
    shift_store: &dyn ShiftStore,
    assignment_store: &dyn AssignmentStore,
    organization_id: &str,
    now: NaiveDateTime,
) -> EngineResult<TickReport> {
    let series_list = series_store.active_open_ended(organization_id)?;
    let mut report = TickReport::default();

    for series in &series_list {
        report.processed += 1;
        match tick_series(series, shift_store, assignment_store, now) {
            Ok(TickOutcome::Created { .. }) => report.created += 1,
            Ok(_) => {}
            Err(err) => {
                warn!(series_id = %series.id, error = %err, "Tick failed for series");
                report.diagnostics.push(TickDiagnostic {
                    series_id: series.id.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}
