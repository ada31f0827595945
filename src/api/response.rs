//! Response types for the Split Allocation Engine API.
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
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(code: &str, error: &EngineError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::new(code, error.to_string()),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match &error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTotalAmount { .. } => {
                Self::bad_request("INVALID_TOTAL_AMOUNT", &error)
            }
            EngineError::EmptyParticipants => Self::bad_request("EMPTY_PARTICIPANTS", &error),
            EngineError::NegativeWeight { .. } => Self::bad_request("NEGATIVE_WEIGHT", &error),
            EngineError::InvalidDateRange { .. } => Self::bad_request("INVALID_DATE_RANGE", &error),
            EngineError::InvalidAbsenceInterval { .. } => {
                Self::bad_request("INVALID_ABSENCE_INTERVAL", &error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization_skips_missing_details() {
        let error = ApiError::new("VALIDATION_ERROR", "bad input");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"VALIDATION_ERROR\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_serialization_includes_details() {
        let error = ApiError::with_details("CONFIG_ERROR", "Configuration error", "missing file");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"missing file\""));
    }

    #[test]
    fn test_validation_error_constructor() {
        let error = ApiError::validation_error("participants missing");
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.message, "participants missing");
    }

    #[test]
    fn test_invalid_total_amount_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::InvalidTotalAmount {
            amount: Decimal::new(-100, 2),
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_TOTAL_AMOUNT");
    }

    #[test]
    fn test_empty_participants_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::EmptyParticipants.into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "EMPTY_PARTICIPANTS");
        assert_eq!(response.error.message, "Participant list is empty");
    }

    #[test]
    fn test_invalid_date_range_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_DATE_RANGE");
    }

    #[test]
    fn test_config_not_found_maps_to_internal_error() {
        let response: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
        assert!(response.error.details.unwrap().contains("engine.yaml"));
    }
}
