//! Server error types.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use user_store::UserStoreError;

use crate::services::registration::RejectReason;

/// Message sent to clients for any failure they did not cause.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Registration rejected by validation.
    #[error(transparent)]
    Validation(#[from] RejectReason),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] UserStoreError),

    /// Request body could not be decoded.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::Validation(reason) => (StatusCode::BAD_REQUEST, reason.to_string()),
            ServerError::Store(_) | ServerError::MalformedBody(_) | ServerError::Internal(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Builds the response for a handler that panicked.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ServerError::Internal(detail).into_response()
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
