//! Cache Statistics Module
//!
//! Point-in-time snapshot of store contents and cumulative counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of the cache taken by [`CacheStore::stats`].
///
/// `valid` and `expired` are judged against the clock at snapshot time;
/// expired-but-unswept entries still count toward `total`.
///
/// [`CacheStore::stats`]: crate::cache::CacheStore::stats
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Resident entries, expired or not
    pub total: usize,
    /// Entries still within their TTL
    pub valid: usize,
    /// Entries past their TTL but not yet removed
    pub expired: usize,
    /// Configured maximum resident entries
    pub capacity: usize,
    /// Successful reads since creation
    pub hits: u64,
    /// Failed reads (absent or expired) since creation
    pub misses: u64,
    /// Entries removed by LRU eviction since creation
    pub evictions: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// hits / (hits + misses), or 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        let requests = self.hits + self.misses;
        if requests == 0 {
            0.0
        } else {
            self.hits as f64 / requests as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.valid, 0);
        assert_eq!(stats.expired, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            ..Default::default()
        };
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_stats_serializes() {
        let stats = CacheStats {
            total: 2,
            valid: 1,
            expired: 1,
            capacity: 100,
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["capacity"], 100);
    }
}
