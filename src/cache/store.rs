//! Cache Store Module
//!
//! Shared storage primitive composed by every eviction policy.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use tracing::info;

use crate::cache::{CacheEntry, CachePolicy, CacheStats};

// == Cache Store ==
/// Plain key-value storage with lookup statistics.
///
/// The store enforces key uniqueness but no capacity and no ordering; the
/// policy that owns it decides what to evict.
#[derive(Debug, Clone)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Lookup and eviction counters
    stats: CacheStats,
}

impl<K, V> Default for CacheStore<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }
}

impl<K: Hash + Eq, V> CacheStore<K, V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores a value, treating `None` for either argument as "missing".
    ///
    /// A missing key or value makes the call a no-op. Returns true if the
    /// value was stored.
    pub fn put(&mut self, key: Option<K>, value: Option<V>) -> bool {
        match self.admit(key, value) {
            Some((key, value)) => {
                self.insert(key, value);
                true
            }
            None => false,
        }
    }

    // == Admit ==
    /// Unwraps a put request, counting it as ignored if either half is missing.
    pub fn admit(&mut self, key: Option<K>, value: Option<V>) -> Option<(K, V)> {
        match (key, value) {
            (Some(key), Some(value)) => Some((key, value)),
            _ => {
                self.stats.record_ignored_put();
                None
            }
        }
    }

    // == Insert ==
    /// Inserts or overwrites a mapping, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    // == Get ==
    /// Retrieves a value by key, recording a hit or miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let value = self.entries.get(key);
        self.stats.record_lookup(value.is_some());
        value
    }

    /// Removes a key. Only eviction paths call this.
    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    // == Evict ==
    /// Discards a key chosen by `policy` and emits the eviction notification.
    pub(crate) fn evict(&mut self, key: &K, policy: CachePolicy)
    where
        K: Display,
    {
        if self.remove(key).is_some() {
            self.stats.record_eviction();
            info!(
                target: "policy_cache::cache",
                policy = policy.as_str(),
                "DISCARD: {}",
                key
            );
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the current contents in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    // == Stats ==
    /// Returns current statistics with an up to date entry count.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Snapshot ==
    /// Copies the current contents in no particular order.
    pub fn snapshot(&self) -> Vec<CacheEntry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.entries
            .iter()
            .map(|(key, value)| CacheEntry::new(key.clone(), value.clone()))
            .collect()
    }

    /// Copies the contents following `keys`, skipping keys that are absent.
    pub fn snapshot_ordered<'a, I>(&self, keys: I) -> Vec<CacheEntry<K, V>>
    where
        I: IntoIterator<Item = &'a K>,
        K: Clone + 'a,
        V: Clone,
    {
        keys.into_iter()
            .filter_map(|key| {
                self.entries
                    .get(key)
                    .map(|value| CacheEntry::new(key.clone(), value.clone()))
            })
            .collect()
    }
}
