//! HTTP API server for the joke service.
//!
//! Serves an in-memory joke collection over JSON endpoints, plus liveness
//! and readiness probes, with structured logging (tracing).

pub mod config;
pub mod error;
pub mod json;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use joke_store::{InMemoryJokeStore, JokeStore};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use routes::jokes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: JokeStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let router = Router::new()
        .route("/health/live", get(routes::health::live))
        .route("/health/ready", get(routes::health::ready))
        .route(
            "/v1/jokes",
            get(routes::jokes::list::<S>).post(routes::jokes::create::<S>),
        )
        .route("/v1/jokes/random", get(routes::jokes::random::<S>))
        .route("/v1/jokes/{id}", get(routes::jokes::get::<S>))
        .fallback(routes::fallback::not_found)
        .with_state(state);

    with_middleware(router)
}

/// Creates the default application state backed by the seeded in-memory store.
pub fn create_default_state() -> Arc<AppState<InMemoryJokeStore>> {
    Arc::new(AppState::new(InMemoryJokeStore::seeded()))
}

/// Panics become 500s; every request gets an info-level span and response line.
fn with_middleware(router: Router) -> Router {
    router.layer(CatchPanicLayer::custom(panic_response)).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(details, "handler panicked");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    async fn boom() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn handler_panic_becomes_internal_server_error() {
        let app = with_middleware(Router::new().route("/boom", get(boom)));

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
