//! Cache-and-count wrapper around a page fetcher.

use std::sync::Arc;

use crate::domain::{KeyValueStore, PageFetcher};
use crate::error::AppError;
use tracing::debug;

/// Prefix for keys holding cached page bodies.
pub const CACHE_KEY_PREFIX: &str = "cached:";
/// Prefix for keys holding per-URL access counters.
pub const COUNT_KEY_PREFIX: &str = "count:";
/// TTL applied to cached bodies unless overridden via [`TrackerService::with_ttl`].
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 10;

/// Wraps any [`PageFetcher`] with short-lived caching and access counting.
///
/// Cached bodies live under `cached:<url>` with a TTL; access counters live
/// under `count:<url>` and persist indefinitely. A cache hit returns the
/// stored body without touching the counter or the network.
///
/// There is no single-flight coordination: concurrent callers on a cold URL
/// may each fetch and each bump the counter. The store primitives are atomic
/// individually, but the check-then-act sequence across them is not.
pub struct TrackerService<F: PageFetcher> {
    fetcher: Arc<F>,
    store: Arc<dyn KeyValueStore>,
    cache_ttl_seconds: u64,
}

impl<F: PageFetcher> TrackerService<F> {
    /// Creates a tracker with the default 10-second cache TTL.
    pub fn new(fetcher: Arc<F>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            fetcher,
            store,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
        }
    }

    /// Overrides the cache TTL, in seconds.
    pub fn with_ttl(mut self, seconds: u64) -> Self {
        self.cache_ttl_seconds = seconds;
        self
    }

    /// Returns the page body for `url`, serving from cache when possible.
    ///
    /// On a cache miss the fetcher is invoked; a successful fetch increments
    /// the URL's access counter, caches the body, and sets its TTL. A cache
    /// hit does not increment the counter.
    ///
    /// # Errors
    ///
    /// Fetcher errors propagate after the access counter is reset to zero.
    /// Store errors propagate directly.
    pub async fn get_tracked_page(&self, url: &str) -> Result<String, AppError> {
        let cache_key = format!("{CACHE_KEY_PREFIX}{url}");
        let count_key = format!("{COUNT_KEY_PREFIX}{url}");

        if let Some(body) = self.store.get(&cache_key).await? {
            debug!("cache hit for {}", url);
            return Ok(body);
        }

        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                // A failed fetch zeroes the counter instead of leaving it
                // untouched, wiping any prior access history for the URL.
                // Looks like a defect, but callers depend on the reset today.
                self.store.set(&count_key, "0").await?;
                return Err(e);
            }
        };

        let count = self.store.incr(&count_key).await?;
        self.store.set(&cache_key, &body).await?;
        self.store
            .expire(&cache_key, self.cache_ttl_seconds)
            .await?;

        debug!("fetched {} (access #{}, cached {}s)", url, count, self.cache_ttl_seconds);
        Ok(body)
    }
}
