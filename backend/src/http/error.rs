//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::services::ForecastError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// No route matched
    NotFound(String),
    /// Body could not be read or deserialized into the request type
    InvalidBody(JsonRejection),
    /// Forecast rejected the request
    Forecast(ForecastError),
    /// Internal server error
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ApiError) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::InvalidBody(rejection) => (
                rejection.status(),
                ApiError::new("INVALID_BODY", "Invalid request body")
                    .with_details(rejection.body_text()),
            ),
            AppError::Forecast(e @ ForecastError::NonPositiveStep { .. }) => {
                (StatusCode::BAD_REQUEST, ApiError::new("INVALID_STEP", e.to_string()))
            }
            AppError::Forecast(e @ ForecastError::TooManyPoints { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("HORIZON_TOO_LARGE", e.to_string()),
            ),
            AppError::Forecast(e @ ForecastError::NonFiniteValue { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", e.to_string()),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_body();

        if status.is_server_error() {
            error!(status = %status, code = %error.code, "{}", error.message);
        } else {
            warn!(status = %status, code = %error.code, "{}", error.message);
        }

        (status, Json(error)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection)
    }
}

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        AppError::Forecast(err)
    }
}
