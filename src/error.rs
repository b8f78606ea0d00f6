//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced while fetching and tracking pages.
#[derive(Debug, Error)]
pub enum AppError {
    /// The page fetch returned a non-success status code.
    #[error("failed to retrieve URL: {url}")]
    Fetch {
        url: String,
        /// Status code of the failed response, when one was received.
        status: Option<u16>,
    },

    /// The request failed before a status code was available
    /// (DNS, connection, or body read errors).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Store errors pass through untranslated; the caller sees whatever
    /// the client reported.
    #[error(transparent)]
    Store(#[from] redis::RedisError),
}

impl AppError {
    /// Builds an [`AppError::Fetch`] for a response with the given status.
    pub fn fetch_failed(url: impl Into<String>, status: Option<u16>) -> Self {
        Self::Fetch {
            url: url.into(),
            status,
        }
    }
}
