//! Error types for Polaris server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::protocol::{ErrorBody, ErrorDetail};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// IO error (binding the listener, serving connections).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polaris core error.
    #[error("Core error: {0}")]
    Core(#[from] polaris_core::Error),

    /// Bind address could not be parsed.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// A configured CORS origin is not a valid header value.
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),

    /// Validation task failed to complete.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Core(e) if e.is_input_error() => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ServerError::Core(e) if e.is_input_error() => {
                tracing::info!("Rejected pipeline: {}", e);
                ErrorDetail::from(e)
            }
            other => {
                tracing::error!("{}", other);
                ErrorDetail::new("Internal", "internal server error")
            }
        };
        (status, Json(ErrorBody { error: detail })).into_response()
    }
}

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
