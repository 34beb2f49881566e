//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use joke_store::JokeStoreError;
use serde_json::json;
use thiserror::Error;

use crate::json::PrettyJson;

/// API-level error type that maps to HTTP responses.
///
/// Every variant renders as `{"message": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Request body could not be decoded.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::NotFound(msg) => tracing::debug!(message = %msg, "not found"),
            ApiError::BadRequest(msg) => tracing::warn!(message = %msg, "rejected request"),
        }

        let body = json!({ "message": self.to_string() });
        (status, PrettyJson(body)).into_response()
    }
}

impl From<JokeStoreError> for ApiError {
    fn from(err: JokeStoreError) -> Self {
        match err {
            JokeStoreError::NotFound(_) => ApiError::NotFound("joke not found".to_string()),
            JokeStoreError::Empty => ApiError::NotFound("no jokes available".to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("invalid joke body: {err}"))
    }
}
