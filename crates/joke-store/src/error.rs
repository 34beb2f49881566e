use thiserror::Error;

/// Errors that can occur when reading from the joke store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JokeStoreError {
    /// No joke with the requested id exists.
    #[error("Joke not found: {0}")]
    NotFound(String),

    /// A random pick was requested but the store holds no jokes.
    #[error("Joke store is empty")]
    Empty,
}

/// Result type for joke store operations.
pub type Result<T> = std::result::Result<T, JokeStoreError>;
