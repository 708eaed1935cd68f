//! Aggregation Pipeline Module
//!
//! Turns the remote catalog's three independent facets (listing, detail,
//! localization) into one ordered collection of merged records, surviving
//! partial failure of any per-item call.

mod aggregator;
mod fetcher;

pub use aggregator::Aggregator;
pub use fetcher::{ItemOutcome, RecordFetcher};

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::models::CachedPayload;

/// The process-wide response cache shared by every fetch and the
/// background sweep.
pub type SharedCache = Arc<RwLock<CacheStore<CachedPayload>>>;
