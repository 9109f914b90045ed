//! Unified error handling
//!
//! [`AppError`] is the application-level error type returned by HTTP
//! handlers. Store and internal failures are logged server-side and
//! surfaced as a generic body; caller errors keep their message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use super::ApiResponse;
use crate::db::repository::RepoError;

/// Application-level Result type used in HTTP handlers
pub type AppResult<T> = Result<T, AppError>;

/// Application error enumeration
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Caller Errors (4xx) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== System Errors (5xx) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, generic) = match &self {
            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, Some(msg.clone()), None),

            // Duplicate invoice for an order is a caller error on this API (400)
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone()), None),

            // Validation (400)
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone()), None),

            // Database errors (500)
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, None, Some("Database error"))
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    Some("Internal server error"),
                )
            }
        };

        let body = Json(ApiResponse::<()> {
            success: false,
            data: None,
            message,
            error: generic.map(str::to_string),
        });

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
