//! Concrete adapters behind the domain traits: HTTP client and key-value stores.

pub mod http;
pub mod kv;
