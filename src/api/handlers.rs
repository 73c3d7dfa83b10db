//! HTTP request handlers for the Net Pay Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_net_pay;
use crate::config::ConfigLoader;
use crate::models::{AuditTrace, CalculationResult, FormattedBreakdown, InputSet};
use crate::presentation::format_currency;

use super::request::{CalculationRequest, FormInput};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/text", post(calculate_text_handler))
        .route("/inputs/reference", get(reference_inputs_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts numeric inputs and returns the calculated breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let inputs = match InputSet::try_from(request) {
        Ok(inputs) => inputs,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Input validation failed"
            );
            return error_response(err.into());
        }
    };

    calculation_response(&state, correlation_id, inputs)
}

/// Handler for POST /calculate/text endpoint.
///
/// Accepts the raw text of each form field, sanitizes it, and returns the
/// calculated breakdown.
async fn calculate_text_handler(
    State(state): State<AppState>,
    payload: Result<Json<FormInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing form calculation request");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    calculation_response(&state, correlation_id, form.into())
}

/// Handler for GET /inputs/reference endpoint.
///
/// Returns the figures a calculator form starts out with.
async fn reference_inputs_handler() -> Json<InputSet> {
    Json(InputSet::reference())
}

/// Runs the calculation and wraps the result in a 200 response.
fn calculation_response(state: &AppState, correlation_id: Uuid, inputs: InputSet) -> Response {
    debug!(correlation_id = %correlation_id, inputs = ?inputs, "Sanitized inputs");

    let result = perform_calculation(correlation_id, &inputs, state.config());

    info!(
        correlation_id = %correlation_id,
        net_total = %result.breakdown.net_total,
        credit_used = %result.breakdown.credit_used,
        duration_us = result.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Performs the net pay calculation and assembles the API result.
fn perform_calculation(
    calculation_id: Uuid,
    inputs: &InputSet,
    config: &ConfigLoader,
) -> CalculationResult {
    let start_time = Instant::now();

    let calculation = calculate_net_pay(inputs, config.rates());
    let suffix = config.scheme().currency_suffix.as_str();
    let formatted = FormattedBreakdown::from_breakdown(&calculation.breakdown, |amount| {
        format_currency(amount, suffix)
    });

    let duration_us = start_time.elapsed().as_micros() as u64;

    CalculationResult {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scheme_code: config.scheme().code.clone(),
        inputs: *inputs,
        breakdown: calculation.breakdown,
        formatted,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            duration_us,
        },
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the bad field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
