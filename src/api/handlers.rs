//! HTTP request handlers for the Roster Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{period_for_offset, period_totals, scheduled_minutes, scheduled_pay};
use crate::models::{PayFrequency, ShiftSchedule};
use crate::recurrence::{TickReport, occurrences_between, tick_all};

use super::request::{
    OccurrencesRequest, PayPeriodRequest, ShiftRequest, TickRequest, TimesheetRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pay-period", post(pay_period_handler))
        .route("/timesheet", post(timesheet_handler))
        .route("/occurrences", post(occurrences_handler))
        .route("/tick", post(tick_handler))
        .with_state(state)
}

/// Response body for the `/pay-period` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodResponse {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
    /// The frequency that produced the period.
    pub frequency: PayFrequency,
    /// Human-readable frequency label.
    pub label: String,
}

/// One shift's computed pay in a `/timesheet` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPayLine {
    /// The shift this line was computed from.
    pub shift_id: String,
    /// Paid minutes after break deduction and rounding.
    pub paid_minutes: i64,
    /// Pay for this shift, display-rounded to 2 decimals.
    pub pay: Decimal,
}

/// Response body for the `/timesheet` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetResponse {
    /// Per-shift pay lines, in request order.
    pub shifts: Vec<ShiftPayLine>,
    /// Aggregated totals, summed exactly and display-rounded once.
    pub totals: TimesheetTotals,
}

/// Aggregated totals in a `/timesheet` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetTotals {
    /// The number of shifts that contributed paid time.
    pub shift_count: usize,
    /// Total paid minutes across all shifts.
    pub paid_minutes: i64,
    /// Total gross pay, display-rounded to 2 decimals.
    pub gross_pay: Decimal,
}

/// Response body for the `/occurrences` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccurrencesResponse {
    /// The matching dates, ascending.
    pub dates: Vec<NaiveDate>,
}

fn json_error(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_error(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /pay-period.
///
/// Computes the pay period containing the requested date, optionally
/// paged by an offset. An omitted or unrecognized frequency falls back to
/// the organization default.
async fn pay_period_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayPeriodRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let frequency = match &request.frequency {
        Some(label) => PayFrequency::from_label(label),
        None => state.context().settings().pay_frequency,
    };
    let period = period_for_offset(request.date, frequency, request.offset);
    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        frequency = frequency.label(),
        start = %period.start_date,
        end = %period.end_date,
        "Computed pay period"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(PayPeriodResponse {
            start_date: period.start_date,
            end_date: period.end_date,
            frequency: period.frequency,
            label: period.label().to_string(),
        }),
    )
        .into_response()
}

/// Handler for POST /timesheet.
///
/// Computes scheduled minutes and pay per shift plus aggregate totals.
/// Totals are summed as exact decimals and rounded for display once, so
/// aggregates do not accumulate per-shift rounding error.
async fn timesheet_handler(
    State(_state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let shifts: Vec<ShiftSchedule> = request
        .shifts
        .into_iter()
        .map(ShiftRequest::into)
        .collect();

    let lines: Vec<ShiftPayLine> = shifts
        .iter()
        .map(|shift| ShiftPayLine {
            shift_id: shift.id.clone(),
            paid_minutes: scheduled_minutes(shift),
            pay: scheduled_pay(shift).round_dp(2),
        })
        .collect();
    let totals = period_totals(&shifts);

    info!(
        correlation_id = %correlation_id,
        shifts = lines.len(),
        paid_minutes = totals.paid_minutes,
        "Computed timesheet"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(TimesheetResponse {
            shifts: lines,
            totals: TimesheetTotals {
                shift_count: totals.shift_count,
                paid_minutes: totals.paid_minutes,
                gross_pay: totals.gross_pay.round_dp(2),
            },
        }),
    )
        .into_response()
}

/// Handler for POST /occurrences.
///
/// Enumerates the dates a weekday set produces over a window.
async fn occurrences_handler(
    State(_state): State<AppState>,
    payload: Result<Json<OccurrencesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Some(&bad) = request.weekdays.iter().find(|&&w| !(1..=7).contains(&w)) {
        warn!(correlation_id = %correlation_id, weekday = bad, "Weekday out of range");
        return json_error(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(format!(
                "weekday {} out of range: expected 1 (Monday) through 7 (Sunday)",
                bad
            )),
        );
    }

    let weekdays = request.weekdays.iter().copied().collect();
    let dates = occurrences_between(&weekdays, request.from_date, request.to_date, request.limit);
    info!(
        correlation_id = %correlation_id,
        from = %request.from_date,
        count = dates.len(),
        "Enumerated occurrences"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(OccurrencesResponse { dates }),
    )
        .into_response()
}

/// Handler for POST /tick.
///
/// Runs the idempotent occurrence materialization across every active,
/// open-ended series of the organization. Safe to call redundantly; a
/// page load typically triggers it.
async fn tick_handler(
    State(state): State<AppState>,
    payload: Result<Json<TickRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let organization_id = request
        .organization_id
        .unwrap_or_else(|| state.context().settings().id.clone());
    let now = request.now.unwrap_or_else(|| Utc::now().naive_utc());

    let result: Result<TickReport, _> = tick_all(
        state.series_store(),
        state.shift_store(),
        state.assignment_store(),
        &organization_id,
        now,
    );

    match result {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                organization_id = %organization_id,
                processed = report.processed,
                created = report.created,
                diagnostics = report.diagnostics.len(),
                "Tick completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                organization_id = %organization_id,
                error = %err,
                "Tick failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_error(api_error.status, api_error.error)
        }
    }
}
