//! Joke read and create endpoints.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use joke_store::{Joke, JokeStore};

use crate::error::ApiError;
use crate::json::PrettyJson;

/// Shared application state accessible from all handlers.
pub struct AppState<S: JokeStore> {
    pub store: S,
}

impl<S: JokeStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// GET /v1/jokes — list every joke in insertion order.
#[tracing::instrument(skip(state))]
pub async fn list<S: JokeStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<PrettyJson<Vec<Joke>>, ApiError> {
    let jokes = state.store.list().await?;
    Ok(PrettyJson(jokes))
}

/// GET /v1/jokes/random — pick one joke uniformly at random.
#[tracing::instrument(skip(state))]
pub async fn random<S: JokeStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<PrettyJson<Joke>, ApiError> {
    let joke = state.store.random().await?;
    Ok(PrettyJson(joke))
}

/// GET /v1/jokes/:id — first joke whose id matches.
#[tracing::instrument(skip(state))]
pub async fn get<S: JokeStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<PrettyJson<Joke>, ApiError> {
    let joke = state.store.get(&id).await?;
    Ok(PrettyJson(joke))
}

/// POST /v1/jokes — append a joke and echo it back.
///
/// The body is decoded as JSON regardless of its `Content-Type`. A body that
/// does not decode into a joke is rejected with 400 and leaves the store
/// untouched.
#[tracing::instrument(skip(state, body))]
pub async fn create<S: JokeStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<(StatusCode, PrettyJson<Joke>), ApiError> {
    let joke: Joke = serde_json::from_slice(&body)?;
    let joke = state.store.append(joke).await?;
    tracing::info!(id = %joke.id, "joke created");

    Ok((StatusCode::CREATED, PrettyJson(joke)))
}
