//! Pokestore - catalog data-acquisition core
//!
//! A bounded, expiring response cache plus a multi-stage aggregation
//! pipeline that fans out per-item fetches against a remote catalog
//! service and merges the results into unified records, surviving partial
//! failure of any per-item call.
//!
//! The presentation layer is a consumer of this crate, not part of it:
//! it asks the [`pipeline::Aggregator`] for a finished collection and
//! renders what it gets back.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod source;
pub mod tasks;

pub use cache::{CacheStats, CacheStore};
pub use config::Config;
pub use error::{CatalogError, SourceError};
pub use models::EnrichedRecord;
pub use pipeline::{Aggregator, SharedCache};
pub use source::{CatalogSource, HttpCatalogSource};
pub use tasks::spawn_sweep_task;
