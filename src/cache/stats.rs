//! Cache Statistics Module
//!
//! Counts lookups, evictions and ignored puts for a single cache instance.

use serde::Serialize;

// == Cache Stats ==
/// Running counters for one cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups that found a value
    pub hits: u64,
    /// Lookups for keys that are not present
    pub misses: u64,
    /// Keys discarded by the eviction policy
    pub evictions: u64,
    /// Puts skipped because the key or value was missing
    pub ignored_puts: u64,
    /// Current number of distinct keys
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was looked up yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Records the outcome of a lookup.
    pub fn record_lookup(&mut self, found: bool) {
        if found {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_ignored_put(&mut self) {
        self.ignored_puts += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
