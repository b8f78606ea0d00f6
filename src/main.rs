use std::sync::Arc;

use page_tracker::application::services::TrackerService;
use page_tracker::config;
use page_tracker::domain::KeyValueStore;
use page_tracker::infrastructure::http::HttpFetcher;
use page_tracker::infrastructure::kv::{MemoryStore, RedisStore};
use tracing_subscriber::EnvFilter;

/// Fetched once on startup as a manual smoke test.
const DEMO_URL: &str = "http://slowwly.robertomurray.co.uk";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    config.print_summary();

    let store: Arc<dyn KeyValueStore> = match config.redis_url {
        Some(ref redis_url) => Arc::new(RedisStore::connect(redis_url).await?),
        None => Arc::new(MemoryStore::new()),
    };

    let tracker = TrackerService::new(Arc::new(HttpFetcher::new()), store)
        .with_ttl(config.cache_ttl_seconds);

    let body = tracker.get_tracked_page(DEMO_URL).await?;
    println!("{body}");

    Ok(())
}
