//! Trait for retrieving a page body over the network.

use crate::error::AppError;
use async_trait::async_trait;

/// Fetches a web page and returns its body as text.
///
/// This is the only network-facing boundary of the system. The tracker
/// service wraps any implementation with caching and access counting,
/// so alternative fetchers (pre-rendered, throttled, recorded) can be
/// swapped in without touching the tracking logic.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpFetcher`] - reqwest-backed GET
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Issues a single GET request to `url` and returns the body text.
    ///
    /// No validation is performed on the URL's shape.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Fetch`] when the response status is not 200.
    /// Returns [`AppError::Transport`] when the request itself fails.
    async fn fetch(&self, url: &str) -> Result<String, AppError>;
}
