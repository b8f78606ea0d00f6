//! In-process store implementation for tests or Redis-less runs.

use crate::domain::KeyValueStore;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

/// A `HashMap`-backed store with real TTL semantics.
///
/// Used when Redis is not configured, and by the integration tests. Data
/// lives only for the lifetime of the process, so access counts do not
/// survive a restart the way they do with [`super::RedisStore`].
///
/// Expired entries are dropped lazily on the next read or write of the key.
/// Timing is based on [`tokio::time::Instant`], so paused-clock tests can
/// advance past a TTL without sleeping.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory store (Redis not configured)");
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap();

        if entries.get(key).is_some_and(|e| e.is_expired(now)) {
            entries.remove(key);
        }

        Ok(entries.get(key).map(|e| e.value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().unwrap();

        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: None,
            },
        );

        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64, AppError> {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap();

        if entries.get(key).is_some_and(|e| e.is_expired(now)) {
            entries.remove(key);
        }

        // A non-numeric value counts as zero.
        let current = entries
            .get(key)
            .and_then(|e| e.value.parse::<i64>().ok())
            .unwrap_or(0);
        let next = current + 1;

        entries.insert(
            key.to_string(),
            Entry {
                value: next.to_string(),
                expires_at: None,
            },
        );

        Ok(next)
    }

    async fn expire(&self, key: &str, seconds: u64) -> Result<(), AppError> {
        let deadline = Instant::now() + Duration::from_secs(seconds);
        let mut entries = self.entries.lock().unwrap();

        if let Some(entry) = entries.get_mut(key) {
            entry.expires_at = Some(deadline);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();

        store.set("k", "v").await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_incr_creates_at_one() {
        let store = MemoryStore::new();

        assert_eq!(store.incr("n").await.unwrap(), 1);
        assert_eq!(store.incr("n").await.unwrap(), 2);
        assert_eq!(store.get("n").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expire_hides_key_after_window() {
        let store = MemoryStore::new();

        store.set("k", "v").await.unwrap();
        store.expire("k", 10).await.unwrap();

        tokio::time::advance(Duration::from_secs(9)).await;
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_clears_previous_ttl() {
        let store = MemoryStore::new();

        store.set("k", "v1").await.unwrap();
        store.expire("k", 10).await.unwrap();
        store.set("k", "v2").await.unwrap();

        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(store.get("k").await.unwrap(), Some("v2".to_string()));
    }

    #[tokio::test]
    async fn test_expire_on_missing_key_is_noop() {
        let store = MemoryStore::new();

        store.expire("missing", 10).await.unwrap();

        assert_eq!(store.get("missing").await.unwrap(), None);
    }
}
