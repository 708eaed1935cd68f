//! Cache Module
//!
//! Bounded in-memory response cache with TTL expiration and LRU eviction.
//!
//! One store instance is shared by a whole process behind
//! `Arc<RwLock<CacheStore>>`; every fetch issued by the aggregation
//! pipeline and the background sweep go through the same lock.

mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use key::cache_key;
pub use stats::CacheStats;
pub use store::CacheStore;
