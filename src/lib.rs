//! # Page Tracker
//!
//! A small web page cache and access tracker backed by Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::PageFetcher`] and
//!   [`domain::KeyValueStore`] trait seams
//! - **Application Layer** ([`application`]) - The cache-and-count
//!   [`application::services::TrackerService`]
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest fetcher, Redis
//!   and in-memory stores
//!
//! ## Behavior
//!
//! [`application::services::TrackerService::get_tracked_page`] serves a URL
//! from cache when a fresh copy exists; otherwise it fetches the page,
//! increments the URL's access counter, and caches the body for a short TTL
//! (10 seconds by default). Cache hits do not touch the counter. A failed
//! fetch resets the counter to zero before the error reaches the caller.
//!
//! There is no retry logic and no single-flight coordination; concurrent
//! callers on a cold URL may each fetch independently.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; without it an in-process store is used
//! export REDIS_URL="redis://localhost:6379/0"
//!
//! # Fetch the demonstration URL and print the body
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. See [`config`]
//! for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::TrackerService;
    pub use crate::domain::{KeyValueStore, PageFetcher};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::HttpFetcher;
    pub use crate::infrastructure::kv::{MemoryStore, RedisStore};
}
