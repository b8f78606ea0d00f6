//! Core trait seams: the page fetcher and the key-value store boundary.

pub mod fetcher;
pub mod store;

pub use fetcher::PageFetcher;
pub use store::KeyValueStore;
