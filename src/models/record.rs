//! Domain records produced and consumed by the aggregation pipeline.

use serde::{Deserialize, Serialize};

// == Source Record ==
/// Minimal item identity taken from the listing stage.
///
/// `detail_locator` is an opaque handle the fetcher resolves to a full
/// detail request; listing position determines final output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub id: u32,
    pub reference_name: String,
    pub detail_locator: String,
}

// == Detail Record ==
/// One item's fully resolved identity facet: everything the detail call
/// provides, before localization is merged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    /// Category tags in the order the source returned them
    pub category_tags: Vec<String>,
}

// == Enriched Record ==
/// Pipeline output: one merged record per successfully resolved item.
///
/// `localized_name` is `None` only when no localization entry matched the
/// configured locale and no fallback applied; within one returned
/// collection, `id` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub id: u32,
    pub name: String,
    pub localized_name: Option<String>,
    pub image_url: String,
    pub category_tags: Vec<String>,
}

impl EnrichedRecord {
    /// Builds the record from its detail facet, localization pending.
    pub fn from_detail(detail: DetailRecord) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
            localized_name: None,
            image_url: detail.image_url,
            category_tags: detail.category_tags,
        }
    }

    /// Display name: the localized name when present, else the source name.
    pub fn display_name(&self) -> &str {
        self.localized_name.as_deref().unwrap_or(&self.name)
    }
}

// == Cached Payload ==
/// The two payload families the shared response cache holds.
///
/// Detail entries live under per-item keys with a long TTL; a finished
/// listing lives under a single listing key with a shorter TTL, since it
/// aggregates many items and should refresh more often relative to cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedPayload {
    Detail(DetailRecord),
    Listing(Vec<EnrichedRecord>),
}

impl CachedPayload {
    pub fn as_detail(&self) -> Option<&DetailRecord> {
        match self {
            CachedPayload::Detail(detail) => Some(detail),
            CachedPayload::Listing(_) => None,
        }
    }

    pub fn as_listing(&self) -> Option<&[EnrichedRecord]> {
        match self {
            CachedPayload::Listing(records) => Some(records),
            CachedPayload::Detail(_) => None,
        }
    }
}
