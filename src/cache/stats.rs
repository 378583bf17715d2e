//! Cache Statistics Module
//!
//! Tracks lookup performance counters: hits, lookups and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Lookup performance counters.
///
/// Only `look_up` moves `lookups` and `hits`; a `store` that overwrites an
/// existing value touches neither.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CacheStats {
    /// Number of lookups performed, hit or miss
    pub lookups: u64,
    /// Number of lookups that found their key
    pub hits: u64,
    /// Number of entries evicted to stay within capacity
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Misses ==
    /// Number of lookups that found nothing.
    pub fn misses(&self) -> u64 {
        self.lookups - self.hits
    }

    // == Hit Ratio ==
    /// Ratio of hits to lookups as a plain floating division.
    ///
    /// With zero lookups this is 0.0/0.0, which yields NaN rather than an
    /// error; callers that need a number before the first lookup must check
    /// `lookups` themselves.
    pub fn hit_ratio(&self) -> f64 {
        self.hits as f64 / self.lookups as f64
    }

    // == Record Lookup ==
    /// Increments the lookup counter.
    pub fn record_lookup(&mut self) {
        self.lookups += 1;
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.lookups, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses(), 0);
        assert_eq!(stats.evictions, 0);
    }

    #[test]
    fn test_hit_ratio_no_lookups_is_nan() {
        let stats = CacheStats::new();
        assert!(stats.hit_ratio().is_nan());
    }

    #[test]
    fn test_hit_ratio_all_hits() {
        let mut stats = CacheStats::new();
        for _ in 0..3 {
            stats.record_lookup();
            stats.record_hit();
        }
        assert_eq!(stats.hit_ratio(), 1.0);
    }

    #[test]
    fn test_hit_ratio_mixed() {
        let mut stats = CacheStats::new();
        stats.record_lookup();
        stats.record_hit();
        stats.record_lookup();
        assert_eq!(stats.hit_ratio(), 0.5);
        assert_eq!(stats.misses(), 1);
    }

    #[test]
    fn test_record_eviction() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_eviction();
        assert_eq!(stats.evictions, 2);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new();
        stats.record_lookup();
        stats.record_hit();

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["lookups"], 1);
        assert_eq!(json["hits"], 1);
        assert_eq!(json["evictions"], 0);
    }
}
