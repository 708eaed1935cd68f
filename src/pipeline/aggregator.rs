//! Aggregation Pipeline
//!
//! Produces one ordered collection of merged records per invocation:
//! listing call, bounded concurrent detail fan-out, bounded concurrent
//! localization fan-out, merge by id.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::cache::cache_key;
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::models::{CachedPayload, EnrichedRecord, SourceRecord};
use crate::pipeline::{ItemOutcome, RecordFetcher, SharedCache};
use crate::source::CatalogSource;

// == Aggregator ==
/// Orchestrates one page-sized aggregation run.
///
/// Owns no state between invocations beyond what it reads from and writes
/// to the shared cache; concurrent invocations race independently.
pub struct Aggregator {
    source: Arc<dyn CatalogSource>,
    fetcher: RecordFetcher,
    cache: SharedCache,
    fetch_limit: u32,
    locale: String,
    listing_ttl: Duration,
    max_concurrency: usize,
}

impl Aggregator {
    // == Constructor ==
    pub fn new(source: Arc<dyn CatalogSource>, cache: SharedCache, config: &Config) -> Self {
        let fetcher = RecordFetcher::new(Arc::clone(&source), Arc::clone(&cache), config.detail_ttl);

        Self {
            source,
            fetcher,
            cache,
            fetch_limit: config.fetch_limit,
            locale: config.locale.clone(),
            listing_ttl: config.listing_ttl,
            max_concurrency: config.max_concurrent_fetches,
        }
    }

    /// Cache key for the finished page, scoped by page size and locale.
    fn listing_key(&self) -> String {
        let limit = self.fetch_limit.to_string();
        cache_key("/listing", &[("limit", &limit), ("locale", &self.locale)])
    }

    // == Fetch Page ==
    /// Fetches, enriches, and merges one page of catalog records.
    ///
    /// Only a failed listing call is an error. Items whose detail fetch
    /// fails are dropped from the result; items whose localization fetch
    /// fails keep their source name. Output preserves listing order and
    /// contains each id at most once.
    pub async fn fetch_page(&self) -> Result<Vec<EnrichedRecord>> {
        let listing_key = self.listing_key();

        let cached = {
            let mut cache = self.cache.write().await;
            cache
                .get(&listing_key)
                .and_then(|payload| payload.as_listing().map(<[EnrichedRecord]>::to_vec))
        };
        if let Some(records) = cached {
            debug!(count = records.len(), "page served from cache");
            return Ok(records);
        }

        let items = self
            .source
            .listing(self.fetch_limit)
            .await
            .map_err(CatalogError::Listing)?;

        let sources: Vec<SourceRecord> = items
            .iter()
            .enumerate()
            .map(|(index, item)| SourceRecord {
                // catalog locators normally embed the id; fall back to the
                // 1-based listing position when they do not
                id: item.id_from_url().unwrap_or(index as u32 + 1),
                reference_name: item.name.clone(),
                detail_locator: item.url.clone(),
            })
            .collect();

        // stage 1: detail fan-out, bounded so a large page cannot open
        // unbounded simultaneous connections
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let detail_futures: Vec<_> = sources
            .iter()
            .map(|record| {
                let semaphore = Arc::clone(&semaphore);
                async move {
                    let _permit = semaphore.acquire().await.expect("semaphore never closed");
                    self.fetcher.resolve(record).await
                }
            })
            .collect();

        let mut details = HashMap::new();
        for outcome in join_all(detail_futures).await {
            match outcome {
                ItemOutcome::Resolved(detail) => {
                    details.insert(detail.id, detail);
                }
                ItemOutcome::Failed { id, reason } => {
                    warn!(id, %reason, "detail fetch failed, item dropped");
                }
            }
        }

        // survivors in listing order; detail failures drop the item
        let mut records: Vec<EnrichedRecord> = sources
            .iter()
            .filter_map(|source| details.get(&source.id).cloned())
            .map(EnrichedRecord::from_detail)
            .collect();

        let dropped = sources.len() - records.len();

        // stage 2: localization fan-out, merged by id
        let localized = self.localize(&records, &semaphore).await;
        for record in &mut records {
            let name = localized
                .get(&record.id)
                .cloned()
                .unwrap_or_else(|| record.name.clone());
            record.localized_name = Some(name);
        }

        {
            let mut cache = self.cache.write().await;
            cache.set(
                listing_key,
                CachedPayload::Listing(records.clone()),
                Some(self.listing_ttl),
            );
        }

        info!(count = records.len(), dropped, "page aggregated");
        Ok(records)
    }

    /// Resolves localized display names for the surviving records.
    ///
    /// Each fetch is fault-isolated: on failure, or when the service has
    /// no entry for the configured locale, the item's source name stands in.
    async fn localize(
        &self,
        records: &[EnrichedRecord],
        semaphore: &Arc<Semaphore>,
    ) -> HashMap<u32, String> {
        let futures: Vec<_> = records
            .iter()
            .map(|record| {
                let semaphore = Arc::clone(semaphore);
                let id = record.id;
                let fallback = record.name.clone();
                async move {
                    let _permit = semaphore.acquire().await.expect("semaphore never closed");
                    match self.source.localization(id).await {
                        Ok(species) => {
                            let name = species
                                .name_for_locale(&self.locale)
                                .unwrap_or(&species.name)
                                .to_string();
                            (id, name)
                        }
                        Err(error) => {
                            warn!(id, %error, "localization fetch failed, using source name");
                            (id, fallback)
                        }
                    }
                }
            })
            .collect();

        join_all(futures).await.into_iter().collect()
    }
}
