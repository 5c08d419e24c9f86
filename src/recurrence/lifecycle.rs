//! Series lifecycle operations.
//!
//! Manager-facing operations on recurring series: ending, reopening, and
//! deactivating. Ending or deactivating a series cancels its future
//! occurrences; clearing an end date never resurrects occurrences that
//! were cancelled, by design — a manager who reopens a series recreates
//! future shifts through the normal tick flow.

use chrono::{Days, NaiveDate};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::RecurringSeries;
use crate::store::{SeriesStore, ShiftStore};

fn load_series(series_store: &dyn SeriesStore, series_id: &str) -> EngineResult<RecurringSeries> {
    series_store
        .get(series_id)?
        .ok_or_else(|| EngineError::SeriesNotFound {
            series_id: series_id.to_string(),
        })
}

/// Sets a series' end date and cancels its occurrences strictly after
/// that date.
///
/// Returns the number of occurrences cancelled.
pub fn set_end_date(
    series_store: &dyn SeriesStore,
    shift_store: &dyn ShiftStore,
    series_id: &str,
    end_date: NaiveDate,
) -> EngineResult<usize> {
    let mut series = load_series(series_store, series_id)?;
    series.end_date = Some(end_date);
    series_store.update(&series)?;

    let cancelled = shift_store.cancel_from(series_id, end_date + Days::new(1))?;
    info!(
        series_id = %series_id,
        end_date = %end_date,
        cancelled,
        "Series end date set"
    );
    Ok(cancelled)
}

/// Reopens a series to ongoing by clearing its end date.
///
/// Occurrences cancelled when the end date was set stay cancelled; the
/// tick regenerates future shifts from the latest surviving occurrence.
pub fn clear_end_date(series_store: &dyn SeriesStore, series_id: &str) -> EngineResult<()> {
    let mut series = load_series(series_store, series_id)?;
    series.end_date = None;
    series_store.update(&series)?;
    info!(series_id = %series_id, "Series reopened to ongoing");
    Ok(())
}

/// Deactivates a series and cancels its occurrences from `today` onward.
///
/// Past occurrences are retained untouched: they were worked (or at least
/// rostered) and remain part of payroll history.
///
/// Returns the number of occurrences cancelled.
pub fn deactivate(
    series_store: &dyn SeriesStore,
    shift_store: &dyn ShiftStore,
    series_id: &str,
    today: NaiveDate,
) -> EngineResult<usize> {
    let mut series = load_series(series_store, series_id)?;
    series.is_active = false;
    series_store.update(&series)?;

    let cancelled = shift_store.cancel_from(series_id, today)?;
    info!(series_id = %series_id, cancelled, "Series deactivated");
    Ok(cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftOccurrence, ShiftStatus};
    use crate::store::MemoryStore;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_series(id: &str) -> RecurringSeries {
        RecurringSeries {
            id: id.to_string(),
            organization_id: "org_001".to_string(),
            weekdays: BTreeSet::from([1, 3, 5]),
            start_date: date(2024, 1, 1),
            end_date: None,
            is_active: true,
            title: "Morning shift".to_string(),
            location: None,
            hourly_rate: Decimal::new(2500, 2),
            break_minutes: 30,
            break_is_paid: false,
            track_time: true,
            default_start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            default_end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            assigned_employee_id: None,
        }
    }

    fn seed_occurrences(store: &MemoryStore, series: &RecurringSeries, dates: &[NaiveDate]) {
        for d in dates {
            ShiftStore::create(store, &ShiftOccurrence::from_series(series, "pending", *d))
                .unwrap();
        }
    }

    fn setup() -> (MemoryStore, RecurringSeries) {
        let store = MemoryStore::new();
        let series = make_series("series_001");
        SeriesStore::create(&store, &series).unwrap();
        seed_occurrences(
            &store,
            &series,
            &[date(2024, 1, 1), date(2024, 1, 3), date(2024, 1, 5), date(2024, 1, 8)],
        );
        (store, series)
    }

    /// LC-001: setting an end date cancels occurrences strictly after it
    #[test]
    fn test_set_end_date_cancels_future_occurrences() {
        let (store, _) = setup();

        let cancelled = set_end_date(&store, &store, "series_001", date(2024, 1, 3)).unwrap();
        assert_eq!(cancelled, 2);

        let occurrences = store.occurrences_for_series("series_001").unwrap();
        assert_eq!(occurrences[0].status, ShiftStatus::Scheduled); // Jan 1
        assert_eq!(occurrences[1].status, ShiftStatus::Scheduled); // Jan 3 (on the end date)
        assert_eq!(occurrences[2].status, ShiftStatus::Cancelled); // Jan 5
        assert_eq!(occurrences[3].status, ShiftStatus::Cancelled); // Jan 8

        let series = store.get("series_001").unwrap().unwrap();
        assert_eq!(series.end_date, Some(date(2024, 1, 3)));
    }

    /// LC-002: clearing the end date reopens the series without
    /// resurrecting cancelled occurrences
    #[test]
    fn test_clear_end_date_round_trip_keeps_cancellations() {
        let (store, _) = setup();
        set_end_date(&store, &store, "series_001", date(2024, 1, 3)).unwrap();

        clear_end_date(&store, "series_001").unwrap();

        let series = store.get("series_001").unwrap().unwrap();
        assert_eq!(series.end_date, None);
        assert!(series.is_open_ended());

        // The asymmetry is intentional: cancelled occurrences stay cancelled
        let occurrences = store.occurrences_for_series("series_001").unwrap();
        assert_eq!(occurrences[2].status, ShiftStatus::Cancelled);
        assert_eq!(occurrences[3].status, ShiftStatus::Cancelled);
    }

    /// LC-003: deactivation cancels from today onward and keeps history
    #[test]
    fn test_deactivate_cancels_from_today() {
        let (store, _) = setup();

        let cancelled = deactivate(&store, &store, "series_001", date(2024, 1, 5)).unwrap();
        assert_eq!(cancelled, 2);

        let series = store.get("series_001").unwrap().unwrap();
        assert!(!series.is_active);

        let occurrences = store.occurrences_for_series("series_001").unwrap();
        assert_eq!(occurrences[0].status, ShiftStatus::Scheduled); // Jan 1 history
        assert_eq!(occurrences[1].status, ShiftStatus::Scheduled); // Jan 3 history
        assert_eq!(occurrences[2].status, ShiftStatus::Cancelled); // Jan 5 today
        assert_eq!(occurrences[3].status, ShiftStatus::Cancelled); // Jan 8
    }

    #[test]
    fn test_operations_on_unknown_series_fail() {
        let store = MemoryStore::new();
        assert!(matches!(
            set_end_date(&store, &store, "missing", date(2024, 1, 1)),
            Err(EngineError::SeriesNotFound { .. })
        ));
        assert!(matches!(
            clear_end_date(&store, "missing"),
            Err(EngineError::SeriesNotFound { .. })
        ));
        assert!(matches!(
            deactivate(&store, &store, "missing", date(2024, 1, 1)),
            Err(EngineError::SeriesNotFound { .. })
        ));
    }
}
