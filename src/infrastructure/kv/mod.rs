//! Key-value store implementations.
//!
//! Provides the [`crate::domain::KeyValueStore`] trait with two backends:
//! - [`RedisStore`] - production Redis-backed store
//! - [`MemoryStore`] - in-process store for tests and Redis-less runs

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
