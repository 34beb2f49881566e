use async_trait::async_trait;

use crate::{Joke, Result};

/// Core trait for joke store implementations.
///
/// A joke store is an ordered, append-only sequence. Insertion order is
/// preserved and ids are not required to be unique.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait JokeStore: Send + Sync {
    /// Returns every stored joke in insertion order.
    async fn list(&self) -> Result<Vec<Joke>>;

    /// Returns the first joke, in insertion order, whose id equals `id`.
    ///
    /// Fails with `NotFound` if no joke matches.
    async fn get(&self, id: &str) -> Result<Joke>;

    /// Returns a uniformly chosen joke.
    ///
    /// Fails with `Empty` if the store holds no jokes.
    async fn random(&self) -> Result<Joke>;

    /// Appends a joke to the end of the sequence and returns it.
    async fn append(&self, joke: Joke) -> Result<Joke>;

    /// Returns the number of stored jokes.
    async fn len(&self) -> usize;

    /// Returns true if the store holds no jokes.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
