//! HTTP-backed page fetching.

mod reqwest_fetcher;

pub use reqwest_fetcher::HttpFetcher;
