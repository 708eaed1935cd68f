//! Cache Store Module
//!
//! Main cache engine: bounded HashMap storage with LRU eviction and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use regex::Regex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Bounded, expiring key/value store.
///
/// Values are opaque snapshots; the store never hands out mutable access.
/// Expired entries are removed lazily on read and eagerly by [`sweep`].
/// When a write would exceed capacity, the entry with the oldest
/// last-access time is evicted (insertion order breaks ties).
///
/// All operations run to completion without suspension; shared instances
/// are wrapped in `Arc<RwLock<..>>` so concurrent fetches and the background
/// sweep serialize through the same lock.
///
/// [`sweep`]: CacheStore::sweep
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Maximum number of resident entries
    capacity: usize,
    /// TTL applied when `set` is called without an explicit one
    default_ttl: Duration,
    /// Monotonic access counter; assigned on insert, refreshed on read,
    /// so eviction order stays exact when millisecond timestamps collide
    next_seq: u64,
    /// Successful reads
    hits: u64,
    /// Misses, including lazy-expired reads
    misses: u64,
    /// Entries removed to make room
    evictions: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a store holding at most `capacity` entries.
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            default_ttl,
            next_seq: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` on a miss or when the entry has expired; a lazily
    /// expired entry is removed as a side effect of the read. A successful
    /// read refreshes the entry's last-access time.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get_mut(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.misses += 1;
                debug!(key, "cache entry expired on read");
                None
            }
            Some(entry) => {
                entry.touch();
                entry.seq = self.next_seq;
                self.next_seq += 1;
                self.hits += 1;
                Some(entry.value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    // == Set ==
    /// Stores a value under `key`, expiring `ttl` (or the default TTL) from now.
    ///
    /// Overwrites any existing entry for the key without evicting. When a
    /// new key would exceed capacity, exactly one entry is evicted first:
    /// the one least recently accessed, oldest insertion winning ties.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_lru();
        }

        let ttl = ttl.unwrap_or(self.default_ttl);
        let seq = self.next_seq;
        self.next_seq += 1;

        self.entries.insert(key, CacheEntry::new(value, ttl, seq));
    }

    // == Evict ==
    /// Removes the least-recently-accessed entry.
    fn evict_lru(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.last_accessed_at, entry.seq))
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            self.entries.remove(&key);
            self.evictions += 1;
            debug!(key = %key, "evicted least-recently-used cache entry");
        }
    }

    // == Delete ==
    /// Removes one entry if present. Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Delete By Pattern ==
    /// Removes every entry whose key matches `pattern`.
    ///
    /// Used for coarse invalidation of a key family, e.g. every detail
    /// entry. Returns the number of entries removed.
    pub fn delete_pattern(&mut self, pattern: &Regex) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !pattern.is_match(key));
        before - self.entries.len()
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Snapshot of the store broken down by validity at call time.
    ///
    /// Does not mutate the store: expired-but-unswept entries are counted,
    /// not removed.
    pub fn stats(&self) -> CacheStats {
        let expired = self
            .entries
            .values()
            .filter(|entry| entry.is_expired())
            .count();

        CacheStats {
            total: self.entries.len(),
            valid: self.entries.len() - expired,
            expired,
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }

    // == Sweep ==
    /// Removes every expired entry, reclaiming memory for keys nobody
    /// requests again. Returns the number of entries removed.
    pub fn sweep(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Current number of resident entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
