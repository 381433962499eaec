//! Error types for the dispatch layer.
//!
//! Bridges the core's error taxonomy to HTTP responses. The body is
//! always the uniform `{"error": "<message>"}` shape, with the core's
//! message relayed verbatim.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use barista_core::CafeError;
use serde::Serialize;
use std::fmt;

/// Application error type for web handlers.
///
/// Wraps a status code and the user-facing message; implements Axum's
/// `IntoResponse` so handlers can return `Result<_, AppError>`.
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (relayed verbatim)
    message: String,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            source: None,
        }
    }

    /// Attach a source error for logging.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 422 Unprocessable Entity error: an orchestration rule or
    /// validator verdict rejected the request.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message.into())
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message.into())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// The uniform error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Human-readable error message.
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                message = %self.message,
                "request failed"
            );
        }

        let body = ErrorResponse {
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<CafeError> for AppError {
    fn from(err: CafeError) -> Self {
        let status = match &err {
            CafeError::NotFound(_) => StatusCode::NOT_FOUND,
            CafeError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CafeError::Conflict(_) => StatusCode::CONFLICT,
            CafeError::InvalidState(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CafeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_statuses() {
        let err = AppError::from(CafeError::not_found("Item", "x"));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Item with ID x not found.");

        let err = AppError::from(CafeError::conflict("taken"));
        assert_eq!(err.status, StatusCode::CONFLICT);

        let err = AppError::from(CafeError::invalid_state("sealed"));
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn validation_errors_relay_the_reason() {
        let err = AppError::validation("Order must have at least one line.");
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "Order must have at least one line.");
    }
}
