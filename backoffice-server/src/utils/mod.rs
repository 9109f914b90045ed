//! Common utilities shared across the application
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - [`ApiResponse`] - unified JSON response envelope
//! - logging and time helpers

pub mod error;
pub mod logger;
pub mod time;

pub use error::{AppError, AppResult};

/// Unified API response envelope
///
/// ```json
/// { "success": true, "data": { ... } }
/// { "success": false, "message": "Order not found" }
/// ```
///
/// `message` carries caller-facing text (4xx failures and delete
/// confirmations); `error` carries the generic text for 5xx failures.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Successful response with a confirmation message and no data
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }
}
