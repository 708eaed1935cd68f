//! Record Fetcher
//!
//! Resolves a single listing item into its detail facet, isolating failure
//! to that item.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::cache_key;
use crate::error::SourceError;
use crate::models::{CachedPayload, DetailRecord, SourceRecord};
use crate::pipeline::SharedCache;
use crate::source::CatalogSource;

// == Item Outcome ==
/// Per-item result of a detail fetch.
///
/// Failures are carried as data so the pipeline's merge step can collapse
/// them uniformly instead of each call site improvising a fallback.
#[derive(Debug)]
pub enum ItemOutcome {
    Resolved(DetailRecord),
    Failed { id: u32, reason: SourceError },
}

// == Record Fetcher ==
/// Cache-first resolution of one [`SourceRecord`] into a [`DetailRecord`].
///
/// Details change rarely, so successful fetches are cached under the
/// item's detail key with a TTL longer than listing-level entries.
pub struct RecordFetcher {
    source: Arc<dyn CatalogSource>,
    cache: SharedCache,
    detail_ttl: Duration,
}

impl RecordFetcher {
    // == Constructor ==
    pub fn new(source: Arc<dyn CatalogSource>, cache: SharedCache, detail_ttl: Duration) -> Self {
        Self {
            source,
            cache,
            detail_ttl,
        }
    }

    /// Cache key for one item's detail entry. All detail keys share the
    /// `/detail/` prefix so a whole family can be invalidated at once.
    pub fn detail_key(id: u32) -> String {
        cache_key(&format!("/detail/{}", id), &[])
    }

    // == Resolve ==
    /// Resolves the record's detail, consulting the cache first.
    ///
    /// A cache hit skips the network entirely. A fetch failure yields
    /// [`ItemOutcome::Failed`]; it never aborts the surrounding batch.
    pub async fn resolve(&self, record: &SourceRecord) -> ItemOutcome {
        let key = Self::detail_key(record.id);

        let cached = {
            let mut cache = self.cache.write().await;
            cache.get(&key).and_then(|payload| payload.as_detail().cloned())
        };
        if let Some(detail) = cached {
            debug!(id = record.id, "detail served from cache");
            return ItemOutcome::Resolved(detail);
        }

        match self.source.detail(&record.detail_locator).await {
            Ok(response) => {
                let detail = response.into_record();
                let mut cache = self.cache.write().await;
                cache.set(
                    key,
                    CachedPayload::Detail(detail.clone()),
                    Some(self.detail_ttl),
                );
                ItemOutcome::Resolved(detail)
            }
            Err(reason) => ItemOutcome::Failed {
                id: record.id,
                reason,
            },
        }
    }
}
