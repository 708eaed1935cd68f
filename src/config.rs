//! Configuration Module
//!
//! Handles loading runtime configuration from environment variables.

use std::env;
use std::time::Duration;

/// Runtime configuration.
///
/// All values can be overridden via environment variables; defaults match
/// the public catalog deployment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote catalog service
    pub base_url: String,
    /// Page size the pipeline requests from the listing call
    pub fetch_limit: u32,
    /// Target language code for localized display names
    pub locale: String,
    /// Maximum number of resident cache entries
    pub cache_capacity: usize,
    /// TTL applied when no explicit one is given
    pub default_ttl: Duration,
    /// TTL for individual detail entries; long, details change rarely
    pub detail_ttl: Duration,
    /// TTL for finished listing pages; short, they aggregate many items
    pub listing_ttl: Duration,
    /// Interval between background sweeps of expired entries
    pub sweep_interval: Duration,
    /// Upper bound on simultaneous in-flight fetches per invocation
    pub max_concurrent_fetches: usize,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    ///
    /// # Environment Variables
    /// - `POKESTORE_BASE_URL` - catalog service root (default: https://pokeapi.co/api/v2)
    /// - `FETCH_LIMIT` - listing page size (default: 151)
    /// - `LOCALE` - display-name language code (default: ko)
    /// - `CACHE_CAPACITY` - maximum cache entries (default: 100)
    /// - `DEFAULT_TTL` - default TTL in seconds (default: 300)
    /// - `DETAIL_TTL` - detail-entry TTL in seconds (default: 1800)
    /// - `LISTING_TTL` - listing-entry TTL in seconds (default: 300)
    /// - `SWEEP_INTERVAL` - sweep frequency in seconds (default: 300)
    /// - `MAX_CONCURRENT_FETCHES` - fan-out bound (default: 16)
    /// - `REQUEST_TIMEOUT` - HTTP timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("POKESTORE_BASE_URL").unwrap_or(defaults.base_url),
            fetch_limit: env_parse("FETCH_LIMIT").unwrap_or(defaults.fetch_limit),
            locale: env::var("LOCALE").unwrap_or(defaults.locale),
            cache_capacity: env_parse("CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            default_ttl: env_secs("DEFAULT_TTL").unwrap_or(defaults.default_ttl),
            detail_ttl: env_secs("DETAIL_TTL").unwrap_or(defaults.detail_ttl),
            listing_ttl: env_secs("LISTING_TTL").unwrap_or(defaults.listing_ttl),
            sweep_interval: env_secs("SWEEP_INTERVAL").unwrap_or(defaults.sweep_interval),
            max_concurrent_fetches: env_parse("MAX_CONCURRENT_FETCHES")
                .unwrap_or(defaults.max_concurrent_fetches),
            request_timeout: env_secs("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            fetch_limit: 151,
            locale: "ko".to_string(),
            cache_capacity: 100,
            default_ttl: Duration::from_secs(300),
            detail_ttl: Duration::from_secs(1800),
            listing_ttl: Duration::from_secs(300),
            sweep_interval: Duration::from_secs(300),
            max_concurrent_fetches: 16,
            request_timeout: Duration::from_secs(10),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn env_secs(name: &str) -> Option<Duration> {
    env_parse::<u64>(name).map(Duration::from_secs)
}
