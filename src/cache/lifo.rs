//! LIFO Cache Module
//!
//! Bounded cache that evicts the most recently inserted key still present.

use std::fmt::Display;
use std::hash::Hash;

use crate::cache::{
    validate_capacity, Cache, CacheEntry, CachePolicy, CacheStats, CacheStore, OrderIndex,
    DEFAULT_CAPACITY,
};
use crate::error::Result;

// == LIFO Cache ==
/// Last-in, first-out cache.
///
/// When a new key arrives at a full cache, the current most recent key is
/// discarded before the new one is admitted, so a call never evicts the key
/// it inserts. Overwriting a present key never evicts but does move that key
/// to the most recent position, making it the next eviction candidate.
#[derive(Debug, Clone)]
pub struct LifoCache<K, V> {
    store: CacheStore<K, V>,
    /// Back = most recent insertion, next to be evicted
    order: OrderIndex<K>,
    capacity: usize,
}

impl<K: Hash + Eq + Clone + Display, V> LifoCache<K, V> {
    // == Constructor ==
    /// Creates a cache holding the default of four keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache holding at most `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            store: CacheStore::new(),
            order: OrderIndex::new(),
            capacity: validate_capacity(capacity)?,
        })
    }
}

impl<K: Hash + Eq + Clone + Display, V> Default for LifoCache<K, V> {
    fn default() -> Self {
        Self {
            store: CacheStore::new(),
            order: OrderIndex::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl<K: Hash + Eq + Clone + Display, V> Cache<K, V> for LifoCache<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<K> {
        // Capacity is checked against the state before this call's insertion
        let mut discarded = None;
        if !self.store.contains(&key) && self.store.len() >= self.capacity {
            if let Some(newest) = self.order.pop_back() {
                self.store.evict(&newest, CachePolicy::Lifo);
                discarded = Some(newest);
            }
        }

        self.store.insert(key.clone(), value);
        self.order.push_back(key);

        discarded
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
        Some(self.capacity)
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
