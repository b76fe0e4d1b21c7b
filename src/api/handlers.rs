//! HTTP request handlers for the salary inflation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use super::request::InflationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/", get(root_handler))
        .route("/api/calculate-inflation", post(calculate_inflation_handler))
        .with_state(state)
}

/// Handler for GET /api/.
async fn root_handler() -> impl IntoResponse {
    Json(json!({ "message": "Salary Inflation Calculator API" }))
}

/// Handler for POST /api/calculate-inflation.
///
/// Validates the request, resolves the inflation rate and returns the
/// adjustment result.
async fn calculate_inflation_handler(
    State(state): State<AppState>,
    payload: Result<Json<InflationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing inflation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let adjustment_request = match request.validate(Utc::now().date_naive()) {
        Ok(validated) => validated,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request validation failed"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    match state.calculator().calculate(&adjustment_request).await {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                start_date = %result.start_date,
                category = %result.category,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Inflation request completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Inflation calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
