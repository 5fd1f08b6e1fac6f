//! API error type with IntoResponse
//!
//! Every error becomes a single-line plain-text body with its status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use postboard_core::{StoreError, ValidationError};

/// Body sent for store failures; the cause is logged, not returned
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Body sent when a lookup misses
pub const NOT_FOUND_MESSAGE: &str = "Post not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Submission missing a field (400)
    Validation(ValidationError),

    /// Request body could not be decoded (400)
    MalformedBody { reason: String },

    /// No post for that user name (404)
    NotFound,

    /// Posts file could not be read or written (500, logged)
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            Self::MalformedBody { reason } => (StatusCode::BAD_REQUEST, reason).into_response(),
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
