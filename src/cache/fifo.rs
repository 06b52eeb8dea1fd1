//! FIFO Cache Module
//!
//! Bounded cache that evicts the earliest-inserted key still present.

use std::fmt::Display;
use std::hash::Hash;

use crate::cache::{
    validate_capacity, Cache, CacheEntry, CachePolicy, CacheStats, CacheStore, OrderIndex,
    DEFAULT_CAPACITY,
};
use crate::error::Result;

// == FIFO Cache ==
/// First-in, first-out cache.
///
/// Overwriting a present key updates its value but keeps its place in line.
#[derive(Debug, Clone)]
pub struct FifoCache<K, V> {
    store: CacheStore<K, V>,
    /// Front = next to be evicted
    order: OrderIndex<K>,
    capacity: usize,
}

impl<K: Hash + Eq + Clone + Display, V> FifoCache<K, V> {
    // == Constructor ==
    /// Creates a cache holding the default of four keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache holding at most `capacity` keys.
    ///
    /// Fails with [`CacheError::InvalidCapacity`](crate::error::CacheError)
    /// when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            store: CacheStore::new(),
            order: OrderIndex::new(),
            capacity: validate_capacity(capacity)?,
        })
    }
}

impl<K: Hash + Eq + Clone + Display, V> Default for FifoCache<K, V> {
    fn default() -> Self {
        Self {
            store: CacheStore::new(),
            order: OrderIndex::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl<K: Hash + Eq + Clone + Display, V> Cache<K, V> for FifoCache<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<K> {
        if !self.store.contains(&key) {
            self.order.push_back(key.clone());
        }
        self.store.insert(key, value);

        if self.store.len() <= self.capacity {
            return None;
        }

        let oldest = self.order.pop_front()?;
        self.store.evict(&oldest, CachePolicy::Fifo);
        Some(oldest)
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
