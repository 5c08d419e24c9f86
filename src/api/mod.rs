//! HTTP API module for the Roster Engine.
//!
//! This module provides a router factory over the engine's calculation
//! and recurrence operations. The crate owns no server process; embedders
//! mount the router wherever they serve it.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{OccurrencesRequest, PayPeriodRequest, ShiftRequest, TickRequest, TimesheetRequest};
pub use response::ApiError;
pub use state::AppState;
