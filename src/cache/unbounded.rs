//! Unbounded Cache Module
//!
//! Cache with no capacity limit; nothing is ever evicted.

use std::hash::Hash;

use crate::cache::{Cache, CacheEntry, CacheStats, CacheStore, OrderIndex};

// == Unbounded Cache ==
/// Passthrough over [`CacheStore`]. Any key ever inserted stays retrievable
/// until it is overwritten.
#[derive(Debug, Clone)]
pub struct UnboundedCache<K, V> {
    store: CacheStore<K, V>,
    /// First-insertion order, used only for snapshots
    order: OrderIndex<K>,
}

impl<K, V> Default for UnboundedCache<K, V> {
    fn default() -> Self {
        Self {
            store: CacheStore::default(),
            order: OrderIndex::default(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> UnboundedCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Hash + Eq + Clone, V> Cache<K, V> for UnboundedCache<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<K> {
        if !self.order.contains(&key) {
            self.order.push_back(key.clone());
        }
        self.store.insert(key, value);
        None
    }

    fn put(&mut self, key: Option<K>, value: Option<V>) -> Option<K> {
        let (key, value) = self.store.admit(key, value)?;
        self.insert(key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    fn snapshot(&self) -> Vec<CacheEntry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.store.snapshot_ordered(self.order.iter())
    }
}
