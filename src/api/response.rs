//! Response types for the Shift Pay Engine API.
//!
//! This module defines the error response structures, the mapping from
//! [`EngineError`] to HTTP status codes, and the `/calendar` response body.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{PublicHoliday, SpecialDayCalendar};

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
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
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
            EngineError::InvalidRange { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    "The exit time must be strictly after the entry time",
                ),
            ),
            EngineError::InvalidTimestamp { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_TIMESTAMP",
                    message,
                    "Expected YYYY-MM-DDTHH:MM, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD HH:MM[:SS]",
                ),
            ),
            EngineError::InvalidRate { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_RATE", message))
            }
            EngineError::InvalidDateKey { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_DATE_KEY", message))
            }
            EngineError::ShiftTooLong { max_minutes, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "SHIFT_TOO_LONG",
                    message,
                    format!("Shifts are limited to {} hours", max_minutes / 60),
                ),
            ),
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

/// Response body for the `/calendar` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// Configured Sundays in ascending order.
    pub sundays: Vec<NaiveDate>,
    /// Configured holidays in ascending order.
    pub holidays: Vec<PublicHoliday>,
    /// Number of distinct special dates.
    pub special_day_count: usize,
    /// The configured IANA zone, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl CalendarResponse {
    /// Builds the response from a calendar and an optional zone name.
    pub fn new(calendar: &SpecialDayCalendar, time_zone: Option<String>) -> Self {
        Self {
            sundays: calendar.sundays().collect(),
            holidays: calendar.holidays().collect(),
            special_day_count: calendar.len(),
            time_zone,
        }
    }
}
