//! Integration Tests for the Aggregation Pipeline
//!
//! Exercises the public API end to end: shared cache, record fetcher,
//! aggregation pipeline, and the background sweep, against a scripted
//! catalog source.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pokestore::models::wire::{
    Artwork, DetailResponse, ListingItem, LocalizedName, NamedResource, OtherSprites,
    SpeciesResponse, Sprites, TypeSlot,
};
use pokestore::{
    cache::CacheStore, spawn_sweep_task, Aggregator, CatalogError, CatalogSource, Config,
    SharedCache, SourceError,
};

// == Scripted Source ==

#[derive(Default)]
struct ScriptedSource {
    names: Vec<&'static str>,
    fail_listing: bool,
    fail_detail: HashSet<u32>,
    fail_localization: HashSet<u32>,
    listing_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl ScriptedSource {
    fn with_names(names: Vec<&'static str>) -> Self {
        Self {
            names,
            ..Default::default()
        }
    }
}

#[async_trait]
impl CatalogSource for ScriptedSource {
    async fn listing(&self, limit: u32) -> Result<Vec<ListingItem>, SourceError> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(SourceError::Status {
                status: 503,
                path: "/pokemon".to_string(),
            });
        }
        Ok(self
            .names
            .iter()
            .take(limit as usize)
            .enumerate()
            .map(|(index, name)| ListingItem {
                name: name.to_string(),
                url: format!("https://catalog.test/pokemon/{}/", index + 1),
            })
            .collect())
    }

    async fn detail(&self, locator: &str) -> Result<DetailResponse, SourceError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let id: u32 = locator
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        if self.fail_detail.contains(&id) {
            return Err(SourceError::Status {
                status: 500,
                path: locator.to_string(),
            });
        }
        Ok(DetailResponse {
            id,
            name: self.names[(id - 1) as usize].to_string(),
            sprites: Sprites {
                other: OtherSprites {
                    official_artwork: Artwork {
                        front_default: Some(format!("https://img.test/{}.png", id)),
                    },
                },
            },
            types: vec![TypeSlot {
                kind: NamedResource {
                    name: "normal".to_string(),
                },
            }],
        })
    }

    async fn localization(&self, id: u32) -> Result<SpeciesResponse, SourceError> {
        if self.fail_localization.contains(&id) {
            return Err(SourceError::Status {
                status: 500,
                path: format!("/pokemon-species/{}", id),
            });
        }
        let name = self.names[(id - 1) as usize];
        Ok(SpeciesResponse {
            id,
            name: name.to_string(),
            names: vec![LocalizedName {
                name: format!("ko-{}", name),
                language: NamedResource {
                    name: "ko".to_string(),
                },
            }],
        })
    }
}

// == Helper Functions ==

fn test_config(limit: u32) -> Config {
    Config {
        fetch_limit: limit,
        ..Config::default()
    }
}

fn fresh_cache() -> SharedCache {
    Arc::new(RwLock::new(CacheStore::new(100, Duration::from_secs(300))))
}

// == Happy Path ==

#[tokio::test]
async fn test_full_page_end_to_end() {
    let source = Arc::new(ScriptedSource::with_names(vec![
        "bulbasaur", "ivysaur", "venusaur",
    ]));
    let cache = fresh_cache();
    let aggregator = Aggregator::new(
        Arc::clone(&source) as Arc<dyn CatalogSource>,
        Arc::clone(&cache),
        &test_config(3),
    );

    let records = aggregator.fetch_page().await.unwrap();

    assert_eq!(records.len(), 3);
    let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(records
        .iter()
        .all(|r| r.localized_name.as_deref().unwrap().starts_with("ko-")));

    // one listing entry plus one detail entry per item
    let stats = cache.read().await.stats();
    assert_eq!(stats.total, 4);
}

// == Partial Failure ==

#[tokio::test]
async fn test_single_detail_failure_shrinks_page_by_one() {
    let mut source = ScriptedSource::with_names(vec!["bulbasaur", "ivysaur", "venusaur"]);
    source.fail_detail.insert(2);
    let aggregator = Aggregator::new(Arc::new(source), fresh_cache(), &test_config(3));

    let records = aggregator.fetch_page().await.unwrap();

    let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3], "item 2 dropped, order preserved");
}

#[tokio::test]
async fn test_single_localization_failure_keeps_page_intact() {
    let mut source = ScriptedSource::with_names(vec!["bulbasaur", "ivysaur", "venusaur"]);
    source.fail_localization.insert(3);
    let aggregator = Aggregator::new(Arc::new(source), fresh_cache(), &test_config(3));

    let records = aggregator.fetch_page().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[2].localized_name.as_deref(), Some("venusaur"));
}

#[tokio::test]
async fn test_listing_failure_is_fatal() {
    let mut source = ScriptedSource::with_names(vec!["bulbasaur"]);
    source.fail_listing = true;
    let aggregator = Aggregator::new(Arc::new(source), fresh_cache(), &test_config(1));

    let result = aggregator.fetch_page().await;

    assert!(matches!(result, Err(CatalogError::Listing(_))));
}

// == Cache Interplay ==

#[tokio::test]
async fn test_cache_shared_across_pipeline_instances() {
    let source = Arc::new(ScriptedSource::with_names(vec!["bulbasaur", "ivysaur"]));
    let cache = fresh_cache();
    let config = test_config(2);

    let first = Aggregator::new(
        Arc::clone(&source) as Arc<dyn CatalogSource>,
        Arc::clone(&cache),
        &config,
    );
    first.fetch_page().await.unwrap();

    // a second pipeline over the same store serves the page without any
    // further network traffic
    let second = Aggregator::new(
        Arc::clone(&source) as Arc<dyn CatalogSource>,
        Arc::clone(&cache),
        &config,
    );
    let records = second.fetch_page().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(source.listing_calls.load(Ordering::SeqCst), 1);
    assert_eq!(source.detail_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_expired_listing_refetched_details_reused() {
    let source = Arc::new(ScriptedSource::with_names(vec!["bulbasaur", "ivysaur"]));
    let cache = fresh_cache();
    let config = Config {
        fetch_limit: 2,
        listing_ttl: Duration::from_millis(30),
        ..Config::default()
    };
    let aggregator = Aggregator::new(
        Arc::clone(&source) as Arc<dyn CatalogSource>,
        Arc::clone(&cache),
        &config,
    );

    aggregator.fetch_page().await.unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;
    aggregator.fetch_page().await.unwrap();

    // the listing entry expired, the per-item details did not
    assert_eq!(source.listing_calls.load(Ordering::SeqCst), 2);
    assert_eq!(source.detail_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_sweep_task_reclaims_expired_page() {
    let source = Arc::new(ScriptedSource::with_names(vec!["bulbasaur"]));
    let cache = fresh_cache();
    let config = Config {
        fetch_limit: 1,
        listing_ttl: Duration::from_millis(20),
        detail_ttl: Duration::from_millis(20),
        ..Config::default()
    };
    let aggregator = Aggregator::new(
        Arc::clone(&source) as Arc<dyn CatalogSource>,
        Arc::clone(&cache),
        &config,
    );
    let sweep = spawn_sweep_task(Arc::clone(&cache), Duration::from_millis(40));

    aggregator.fetch_page().await.unwrap();
    assert!(cache.read().await.stats().total > 0);

    tokio::time::sleep(Duration::from_millis(100)).await;

    // the sweep, not a read, reclaimed the expired entries
    assert_eq!(cache.read().await.stats().total, 0);

    sweep.abort();
}
