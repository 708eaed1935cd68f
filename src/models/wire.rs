//! Wire DTOs for the remote catalog's JSON payloads.
//!
//! Shapes follow the upstream REST service; nested objects are flattened
//! into domain records at the module boundary so nothing downstream
//! depends on the wire format.

use serde::Deserialize;

use crate::models::DetailRecord;

/// Fallback sprite location used when the detail payload carries no artwork.
const SPRITE_FALLBACK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

// == Listing ==
/// One page of the listing call: an ordered sequence of name/locator pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    pub results: Vec<ListingItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingItem {
    pub name: String,
    pub url: String,
}

impl ListingItem {
    /// Extracts the numeric identifier from the trailing path segment of
    /// the locator URL (`.../pokemon/25/` -> 25).
    pub fn id_from_url(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

// == Detail ==
/// Detail call payload: identity, artwork, and ordered category tags.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

impl DetailResponse {
    /// Flattens the payload into a [`DetailRecord`], preserving tag order.
    ///
    /// Items without official artwork fall back to the plain sprite URL
    /// derived from the identifier.
    pub fn into_record(self) -> DetailRecord {
        let image_url = self
            .sprites
            .other
            .official_artwork
            .front_default
            .unwrap_or_else(|| format!("{}/{}.png", SPRITE_FALLBACK_BASE, self.id));

        DetailRecord {
            id: self.id,
            name: self.name,
            image_url,
            category_tags: self.types.into_iter().map(|slot| slot.kind.name).collect(),
        }
    }
}

// == Localization ==
/// Species payload: the set of localized names for one item.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

impl SpeciesResponse {
    /// The name matching `locale`, or `None` when the service carries no
    /// entry for that language.
    pub fn name_for_locale(&self, locale: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|entry| entry.language.name == locale)
            .map(|entry| entry.name.as_str())
    }
}
