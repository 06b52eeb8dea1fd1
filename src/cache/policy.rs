//! Policy Selection Module
//!
//! Names the eviction policies and builds a cache for one chosen at runtime.

use std::fmt::{self, Display};
use std::hash::Hash;
use std::str::FromStr;

use serde::Serialize;

use crate::cache::{Cache, CacheEntry, CacheStats, FifoCache, LifoCache, UnboundedCache};
use crate::error::{CacheError, Result};

// == Cache Policy ==
/// Eviction policy identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CachePolicy {
    /// No capacity limit
    Basic,
    /// Evict the earliest insertion
    Fifo,
    /// Evict the latest insertion
    Lifo,
}

impl CachePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CachePolicy::Basic => "basic",
            CachePolicy::Fifo => "fifo",
            CachePolicy::Lifo => "lifo",
        }
    }
}

impl Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CachePolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "unbounded" => Ok(CachePolicy::Basic),
            "fifo" => Ok(CachePolicy::Fifo),
            "lifo" => Ok(CachePolicy::Lifo),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}

// == Policy Cache ==
/// A cache whose policy is picked at construction time.
#[derive(Debug, Clone)]
pub enum PolicyCache<K, V> {
    Basic(UnboundedCache<K, V>),
    Fifo(FifoCache<K, V>),
    Lifo(LifoCache<K, V>),
}

impl<K: Hash + Eq + Clone + Display, V> PolicyCache<K, V> {
    /// Builds a cache for `policy`. `capacity` is ignored by the basic policy.
    pub fn new(policy: CachePolicy, capacity: usize) -> Result<Self> {
        Ok(match policy {
            CachePolicy::Basic => PolicyCache::Basic(UnboundedCache::new()),
            CachePolicy::Fifo => PolicyCache::Fifo(FifoCache::with_capacity(capacity)?),
            CachePolicy::Lifo => PolicyCache::Lifo(LifoCache::with_capacity(capacity)?),
        })
    }

    pub fn policy(&self) -> CachePolicy {
        match self {
            PolicyCache::Basic(_) => CachePolicy::Basic,
            PolicyCache::Fifo(_) => CachePolicy::Fifo,
            PolicyCache::Lifo(_) => CachePolicy::Lifo,
        }
    }

    fn as_cache(&self) -> &dyn Cache<K, V> {
        match self {
            PolicyCache::Basic(cache) => cache,
            PolicyCache::Fifo(cache) => cache,
            PolicyCache::Lifo(cache) => cache,
        }
    }

    fn as_cache_mut(&mut self) -> &mut dyn Cache<K, V> {
        match self {
            PolicyCache::Basic(cache) => cache,
            PolicyCache::Fifo(cache) => cache,
            PolicyCache::Lifo(cache) => cache,
        }
    }
}

impl<K: Hash + Eq + Clone + Display, V> Cache<K, V> for PolicyCache<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<K> {
        self.as_cache_mut().insert(key, value)
    }

    fn put(&mut self, key: Option<K>, value: Option<V>) -> Option<K> {
        self.as_cache_mut().put(key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.as_cache_mut().get(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.as_cache().contains(key)
    }

    fn len(&self) -> usize {
        self.as_cache().len()
    }

    fn capacity(&self) -> Option<usize> {
        self.as_cache().capacity()
    }

    fn stats(&self) -> CacheStats {
        self.as_cache().stats()
    }

    fn snapshot(&self) -> Vec<CacheEntry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        match self {
            PolicyCache::Basic(cache) => cache.snapshot(),
            PolicyCache::Fifo(cache) => cache.snapshot(),
            PolicyCache::Lifo(cache) => cache.snapshot(),
        }
    }
}
