//! Response types for the rental pricing engine API.
//!
//! This module defines the success bodies and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::Statement;
use crate::pricing::PricingRule;

/// Response body for the `/statement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementResponse {
    /// Unique identifier for this statement.
    pub statement_id: Uuid,
    /// When the statement was computed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that computed the statement.
    pub engine_version: String,
    /// The computed statement.
    pub statement: Statement,
    /// The statement rendered as text.
    pub report: String,
}

/// Response body for the `/rules` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RulesResponse {
    /// The registered rules, ordered by category.
    pub rules: Vec<PricingRule>,
}

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
    /// Creates a 400 Bad Request response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
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
        let message = error.to_string();
        match error {
            EngineError::UnknownCategory { category } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_CATEGORY",
                    message,
                    format!("The category '{}' has no registered pricing rule", category),
                ),
            },
            EngineError::InvalidDuration { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DURATION",
                    message,
                    "Rentals must be for at least one day",
                ),
            },
            EngineError::InvalidRentalItem { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RENTAL",
                    message,
                    "The rental data contains invalid information",
                ),
            },
            EngineError::AmountOverflow { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "AMOUNT_OVERFLOW",
                    message,
                    "The statement amounts exceed the supported range",
                ),
            },
            EngineError::InvalidRuleDefinition { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
