//! Data models for the catalog core.
//!
//! `record` holds the domain types the pipeline produces; `wire` holds the
//! serde DTOs matching the remote service's JSON.

pub mod record;
pub mod wire;

// Re-export commonly used types
pub use record::{CachedPayload, DetailRecord, EnrichedRecord, SourceRecord};
pub use wire::{DetailResponse, ListingItem, ListingResponse, SpeciesResponse};
