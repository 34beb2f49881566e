//! Liveness and readiness probes.

use axum::http::StatusCode;

/// GET /health/live — always succeeds with an empty body.
pub async fn live() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready — always succeeds with an empty body.
pub async fn ready() -> StatusCode {
    StatusCode::OK
}
