//! Reqwest-backed catalog source

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::SourceError;
use crate::models::wire::{DetailResponse, ListingItem, ListingResponse, SpeciesResponse};
use crate::source::CatalogSource;

// == HTTP Catalog Source ==
/// [`CatalogSource`] over HTTP with a per-request timeout.
///
/// The client is cheap to clone and pools connections internally, so one
/// instance serves every concurrent fetch of a pipeline invocation.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    // == Constructor ==
    /// Creates a source rooted at `base_url` (no trailing slash) with the
    /// given per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Issues a GET and decodes the JSON body; non-success statuses become
    /// [`SourceError::Status`] without attempting to read a body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        debug!(url, "catalog request");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                path: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Resolves a locator that may be absolute (listing items carry full
    /// URLs) or a path relative to the base.
    fn resolve(&self, locator: &str) -> String {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            locator.to_string()
        } else {
            format!("{}/{}", self.base_url, locator.trim_start_matches('/'))
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn listing(&self, limit: u32) -> Result<Vec<ListingItem>, SourceError> {
        let url = format!("{}/pokemon?limit={}", self.base_url, limit);
        let page: ListingResponse = self.get_json(&url).await?;
        Ok(page.results)
    }

    async fn detail(&self, locator: &str) -> Result<DetailResponse, SourceError> {
        self.get_json(&self.resolve(locator)).await
    }

    async fn localization(&self, id: u32) -> Result<SpeciesResponse, SourceError> {
        let url = format!("{}/pokemon-species/{}", self.base_url, id);
        self.get_json(&url).await
    }
}
