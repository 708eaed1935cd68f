//! Pokestore demo binary
//!
//! One-shot run of the data-acquisition core: fetch a page of catalog
//! records through the aggregation pipeline and print them.
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the shared cache store and start the background sweep
//! 4. Build the HTTP catalog source and aggregation pipeline
//! 5. Fetch one page, print it, stop the sweep

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokestore::{
    cache::CacheStore, spawn_sweep_task, Aggregator, Config, HttpCatalogSource, SharedCache,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokestore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        base_url = %config.base_url,
        fetch_limit = config.fetch_limit,
        locale = %config.locale,
        cache_capacity = config.cache_capacity,
        "starting pokestore"
    );

    let cache: SharedCache = Arc::new(RwLock::new(CacheStore::new(
        config.cache_capacity,
        config.default_ttl,
    )));
    let sweep_handle = spawn_sweep_task(Arc::clone(&cache), config.sweep_interval);

    let source = HttpCatalogSource::new(config.base_url.clone(), config.request_timeout)
        .context("failed to build HTTP client")?;
    let aggregator = Aggregator::new(Arc::new(source), Arc::clone(&cache), &config);

    let records = aggregator
        .fetch_page()
        .await
        .context("page aggregation failed")?;

    for record in &records {
        println!(
            "#{:<4} {:<14} {:<14} [{}]",
            record.id,
            record.name,
            record.display_name(),
            record.category_tags.join(", ")
        );
    }

    let stats = cache.read().await.stats();
    info!(
        records = records.len(),
        cache_total = stats.total,
        cache_hits = stats.hits,
        cache_misses = stats.misses,
        "done"
    );

    sweep_handle.abort();
    Ok(())
}
