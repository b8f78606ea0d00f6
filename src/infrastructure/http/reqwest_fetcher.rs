//! reqwest-backed implementation of [`PageFetcher`].

use crate::domain::PageFetcher;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

/// Fetches pages with a shared [`reqwest::Client`].
///
/// One GET per invocation; no retry or redirect policy beyond the client's
/// defaults. The client reuses connections across calls, so a single
/// `HttpFetcher` should be shared rather than rebuilt per request.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a default client configuration.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("GET {} returned {}", url, status);
            return Err(AppError::fetch_failed(url, Some(status.as_u16())));
        }

        response.text().await.map_err(|e| AppError::Transport {
            url: url.to_string(),
            source: e,
        })
    }
}
