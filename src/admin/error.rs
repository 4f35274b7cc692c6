//! HTTP error mapping for the admin routes
//!
//! Error bodies have the shape:
//!
//! ```json
//! { "code": "E0003", "message": "Product not found: prod_..." }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::error::SheetgenError;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Admin route error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Product does not exist (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Malformed request or invalid argument (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Storage failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type for admin handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<SheetgenError> for ApiError {
    fn from(err: SheetgenError) -> Self {
        match err {
            SheetgenError::ProductNotFound(_) => ApiError::NotFound(err.to_string()),
            SheetgenError::InvalidArgument(_) => ApiError::Validation(err.to_string()),
            SheetgenError::DatabaseError(msg) => ApiError::Database(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),
            ApiError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Database error")
            }
            ApiError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9001", "Internal server error")
            }
        };

        let body = Json(ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
        });

        (status, body).into_response()
    }
}
