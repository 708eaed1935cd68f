//! Remote Data Source Module
//!
//! Abstraction over the catalog REST service, plus the reqwest-backed
//! implementation used in production. The pipeline only ever talks to the
//! trait, which keeps batch logic testable without a network.

mod http;

pub use http::HttpCatalogSource;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::wire::{DetailResponse, ListingItem, SpeciesResponse};

// == Catalog Source ==
/// The three calls the aggregation pipeline consumes.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the listing page, at most `limit` items, in catalog order.
    async fn listing(&self, limit: u32) -> Result<Vec<ListingItem>, SourceError>;

    /// Resolves one item's detail by its opaque locator.
    async fn detail(&self, locator: &str) -> Result<DetailResponse, SourceError>;

    /// Fetches the localized-name set for one item.
    async fn localization(&self, id: u32) -> Result<SpeciesResponse, SourceError>;
}
