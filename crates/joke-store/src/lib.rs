//! Joke storage for the joke service.
//!
//! This crate provides:
//! - The `Joke` record and its wire representation
//! - The `JokeStore` trait for ordered, append-only joke collections
//! - `InMemoryJokeStore`, a lock-guarded in-memory implementation
//! - The fixed seed collection loaded at startup

pub mod error;
pub mod joke;
pub mod memory;
pub mod seed;
pub mod store;

pub use error::{JokeStoreError, Result};
pub use joke::Joke;
pub use memory::InMemoryJokeStore;
pub use store::JokeStore;
