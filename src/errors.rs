use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use crate::models::ErrorResponse;

/// Failure talking to (or making sense of) the USDA FoodData Central API.
///
/// `status` holds the upstream HTTP status when the remote answered with a
/// non-success code; it is `None` for configuration, transport, timeout and
/// decoding failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamError {
    pub message: String,
    pub status: Option<u16>,
}

impl UpstreamError {
    /// Error without an upstream status code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Error for a non-success upstream response.
    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UpstreamError {}

/// Errors returned by HTTP handlers.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Resource not found error.
    NotFound(String),
    /// Upstream provider failure, surfaced as 502.
    BadGateway(String),
    /// Request parameters failed validation.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<UpstreamError> for AppError {
    /// Every upstream failure is a gateway failure unless a handler decides otherwise.
    fn from(err: UpstreamError) -> Self {
        AppError::BadGateway(err.message)
    }
}

impl IntoResponse for AppError {
    /// Maps each variant to its status code and a `{"detail": ...}` body.
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadGateway(msg) => {
                tracing::error!("Upstream error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            AppError::Validation(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
