use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use tokio::sync::RwLock;

use crate::{Joke, JokeStore, JokeStoreError, Result, seed};

/// In-memory joke store.
///
/// Jokes live in a single vector behind a read/write lock. Reads share the
/// lock; appends take it exclusively. Cloning the store yields a handle to the
/// same sequence.
#[derive(Clone, Default)]
pub struct InMemoryJokeStore {
    jokes: Arc<RwLock<Vec<Joke>>>,
}

impl InMemoryJokeStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given jokes in order.
    pub fn with_jokes(jokes: Vec<Joke>) -> Self {
        Self {
            jokes: Arc::new(RwLock::new(jokes)),
        }
    }

    /// Creates a store pre-populated with the seed collection.
    pub fn seeded() -> Self {
        Self::with_jokes(seed::jokes())
    }
}

#[async_trait]
impl JokeStore for InMemoryJokeStore {
    async fn list(&self) -> Result<Vec<Joke>> {
        Ok(self.jokes.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Joke> {
        let jokes = self.jokes.read().await;
        jokes
            .iter()
            .find(|joke| joke.id == id)
            .cloned()
            .ok_or_else(|| JokeStoreError::NotFound(id.to_string()))
    }

    async fn random(&self) -> Result<Joke> {
        let jokes = self.jokes.read().await;
        if jokes.is_empty() {
            return Err(JokeStoreError::Empty);
        }
        let index = rand::rng().random_range(0..jokes.len());
        Ok(jokes[index].clone())
    }

    async fn append(&self, joke: Joke) -> Result<Joke> {
        let mut jokes = self.jokes.write().await;
        jokes.push(joke.clone());
        tracing::debug!(id = %joke.id, total = jokes.len(), "joke appended");
        Ok(joke)
    }

    async fn len(&self) -> usize {
        self.jokes.read().await.len()
    }
}
