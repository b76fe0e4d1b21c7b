//! Response types for the salary inflation API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Message returned for any failure inside the engine.
pub const CALCULATION_FAILED_MESSAGE: &str =
    "An error occurred while calculating inflation. Please try again later.";

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the generic calculation failure response.
    pub fn calculation_failed(details: impl Into<String>) -> Self {
        Self::with_details("CALCULATION_ERROR", CALCULATION_FAILED_MESSAGE, details)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidRequest { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Invalid value for field '{}'", field),
                ),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        error.to_string(),
                    ),
                }
            }
            EngineError::SeriesFetch { .. }
            | EngineError::CacheIo { .. }
            | EngineError::IndexUnavailable { .. }
            | EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::calculation_failed(error.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_request_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidRequest {
            field: "start_date".to_string(),
            message: "Start date cannot be in the future".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert_eq!(api_error.error.message, "Start date cannot be in the future");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("Invalid value for field 'start_date'")
        );
    }

    #[test]
    fn test_index_unavailable_maps_to_generic_failure() {
        let api_error: ApiErrorResponse = EngineError::IndexUnavailable {
            year: 1987,
            message: "resolved inflation rate inf is not finite".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CALCULATION_ERROR");
        assert_eq!(api_error.error.message, CALCULATION_FAILED_MESSAGE);
        assert!(api_error.error.details.unwrap().contains("1987"));
    }

    #[test]
    fn test_config_error_maps_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "config/cpi_u/resolver.yaml".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
