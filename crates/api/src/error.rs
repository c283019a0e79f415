use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use temple_core::error::CoreError;

use crate::response::ErrorResponse;

/// Message sent for any failure whose detail must not reach the client.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Message sent when a request exceeds the configured timeout.
pub const TIMEOUT_MESSAGE: &str = "The request timed out before it could be completed";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for input problems and adds storage and HTTP-specific
/// variants. Implements [`IntoResponse`] to produce the
/// `{ "status": "error", "message": ... }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `temple_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database failure. The driver message is passed through to the
    /// client, prefixed with `context`.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request outlived `REQUEST_TIMEOUT_SECS`, typically stalled in storage.
    #[error("Request timed out")]
    Timeout,

    /// An internal error; the message is logged but never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn storage(context: &'static str, source: sqlx::Error) -> Self {
        Self::Storage { context, source }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::Storage { context, source } => {
                tracing::error!(error = %source, "{context}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{context}: {source}"),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::Timeout => {
                tracing::warn!("Request timed out");
                (StatusCode::GATEWAY_TIMEOUT, TIMEOUT_MESSAGE.to_string())
            }

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UNEXPECTED_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
