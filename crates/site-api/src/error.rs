//! Error types for the site API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Document store error.
    #[error("store error: {0}")]
    Store(#[from] store::StoreError),
}

impl IntoResponse for ApiError {
    /// Every failure collapses to the same generic 500 response. The
    /// underlying cause is logged here and never sent to the caller.
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(err) => {
                tracing::error!("Store error: {}", err);
            }
        }

        let body = serde_json::json!({
            "error": "Internal server error"
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
