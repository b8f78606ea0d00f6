//! Key-value store boundary consumed by the tracker service.

use crate::error::AppError;
use async_trait::async_trait;

/// The four store primitives the tracker needs.
///
/// Each primitive is atomic on its own; no grouping of operations is
/// transactional. Implementations must be thread-safe.
///
/// # Implementations
///
/// - [`crate::infrastructure::kv::RedisStore`] - production Redis store
/// - [`crate::infrastructure::kv::MemoryStore`] - in-process store for
///   tests and Redis-less runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieves the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` when the key exists and has not expired
    /// - `Ok(None)` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any existing value and
    /// clearing any TTL previously set on the key.
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Increments the integer value under `key` by one, creating it at 1
    /// when absent. Returns the value after the increment.
    async fn incr(&self, key: &str) -> Result<i64, AppError>;

    /// Marks `key` to expire after `seconds`. A subsequent [`get`] past
    /// that window observes the key as absent.
    ///
    /// [`get`]: KeyValueStore::get
    async fn expire(&self, key: &str, seconds: u64) -> Result<(), AppError>;
}
