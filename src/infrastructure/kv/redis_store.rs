//! Redis-backed store implementation.

use crate::domain::KeyValueStore;
use crate::error::AppError;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis store used for cached page bodies and access counters.
///
/// Uses `ConnectionManager` for connection reuse and reconnection. Unlike a
/// fail-open cache, every operation propagates Redis errors to the caller:
/// the counter data lives here too, and silently dropping writes would
/// corrupt it.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.client.clone();
        let value: Option<String> = conn.get(key).await?;

        match &value {
            Some(_) => debug!("GET {} -> hit", key),
            None => debug!("GET {} -> miss", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut conn = self.client.clone();
        conn.set::<_, _, ()>(key, value).await?;

        debug!("SET {} ({} bytes)", key, value.len());
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64, AppError> {
        let mut conn = self.client.clone();
        let count: i64 = conn.incr(key, 1).await?;

        debug!("INCR {} -> {}", key, count);
        Ok(count)
    }

    async fn expire(&self, key: &str, seconds: u64) -> Result<(), AppError> {
        let mut conn = self.client.clone();
        conn.expire::<_, ()>(key, seconds as i64).await?;

        debug!("EXPIRE {} {}s", key, seconds);
        Ok(())
    }
}
