//! HTTP request handlers for the Split Allocation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::allocation::{calculate_presence_days, compute_split, days_between_inclusive};
use crate::models::{AbsenceInterval, AuditTrace, PresenceReport, SplitReport, SplitStrategy};

use super::request::{PresenceRequest, SplitRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/split", post(split_handler))
        .route("/presence", post(presence_handler))
        .with_state(state)
}

/// Handler for POST /split endpoint.
///
/// Accepts a split request and returns the computed per-participant
/// breakdown with its audit trace.
async fn split_handler(
    State(state): State<AppState>,
    payload: Result<Json<SplitRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing split request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let strategy: SplitStrategy = request.split.into();
    let split_type = strategy.split_type();

    let start_time = Instant::now();
    match compute_split(request.total_amount, &strategy, state.config().config()) {
        Ok(computed) => {
            let duration = start_time.elapsed();
            if computed.result.rescale_applied {
                warn!(
                    correlation_id = %correlation_id,
                    split_type = %split_type,
                    "Supplied weights were off target and rescaled"
                );
            }
            info!(
                correlation_id = %correlation_id,
                split_type = %split_type,
                participants = computed.result.shares.len(),
                total_amount = %computed.result.total_amount,
                duration_us = duration.as_micros(),
                "Split computed successfully"
            );

            let report = SplitReport {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                result: computed.result,
                audit_trace: AuditTrace {
                    steps: computed.audit_steps,
                    warnings: computed.warnings,
                    duration_us: duration.as_micros() as u64,
                },
            };
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
                error = %err,
                "Split computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /presence endpoint.
///
/// Accepts a room's member list, absence records, and a date range, and
/// returns per-member presence-day counts.
async fn presence_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PresenceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing presence request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let absences: Vec<AbsenceInterval> = request.absences.into_iter().map(Into::into).collect();

    match calculate_presence_days(
        &request.members,
        &absences,
        request.range_start,
        request.range_end,
    ) {
        Ok(members) => {
            info!(
                correlation_id = %correlation_id,
                members = members.len(),
                "Presence days computed successfully"
            );

            let report = PresenceReport {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                range_start: request.range_start,
                range_end: request.range_end,
                total_days: days_between_inclusive(request.range_start, request.range_end),
                members,
            };
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
                error = %err,
                "Presence computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Maps a JSON extraction rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
