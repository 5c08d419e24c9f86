//! Application state for the Roster Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::OrgContext;
use crate::store::{AssignmentStore, MemoryStore, SeriesStore, ShiftStore};

/// Shared application state.
///
/// Carries the organization context and the collaborator stores the tick
/// endpoint operates on.
#[derive(Clone)]
pub struct AppState {
    context: Arc<OrgContext>,
    series_store: Arc<dyn SeriesStore>,
    shift_store: Arc<dyn ShiftStore>,
    assignment_store: Arc<dyn AssignmentStore>,
}

impl AppState {
    /// Creates application state over explicit store implementations.
    pub fn new(
        context: OrgContext,
        series_store: Arc<dyn SeriesStore>,
        shift_store: Arc<dyn ShiftStore>,
        assignment_store: Arc<dyn AssignmentStore>,
    ) -> Self {
        Self {
            context: Arc::new(context),
            series_store,
            shift_store,
            assignment_store,
        }
    }

    /// Creates application state backed by a single in-memory store,
    /// suitable for tests and demos.
    pub fn in_memory(context: OrgContext) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            context: Arc::new(context),
            series_store: store.clone(),
            shift_store: store.clone(),
            assignment_store: store,
        }
    }

    /// Returns the organization context.
    pub fn context(&self) -> &OrgContext {
        &self.context
    }

    /// Returns the series store.
    pub fn series_store(&self) -> &dyn SeriesStore {
        self.series_store.as_ref()
    }

    /// Returns the shift store.
    pub fn shift_store(&self) -> &dyn ShiftStore {
        self.shift_store.as_ref()
    }

    /// Returns the assignment store.
    pub fn assignment_store(&self) -> &dyn AssignmentStore {
        self.assignment_store.as_ref()
    }
}
