//! Shared Cache Module
//!
//! Thread-safe handle over a [`PolicyCache`].

use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{Cache, CacheEntry, CachePolicy, CacheStats, PolicyCache};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle exposing the same `put`/`get` contract from many tasks.
///
/// The store and its order index sit behind one lock, so no caller can see
/// them out of step.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<PolicyCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone + Display,
    V: Clone,
{
    pub fn new(cache: PolicyCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Builds the cache for `policy` and wraps it.
    pub fn with_policy(policy: CachePolicy, capacity: usize) -> Result<Self> {
        Ok(Self::new(PolicyCache::new(policy, capacity)?))
    }

    /// See [`Cache::put`].
    pub async fn put(&self, key: Option<K>, value: Option<V>) -> Option<K> {
        self.inner.lock().await.put(key, value)
    }

    /// See [`Cache::insert`].
    pub async fn insert(&self, key: K, value: V) -> Option<K> {
        self.inner.lock().await.insert(key, value)
    }

    /// Returns a copy of the value, since the lock is released on return.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().await.get(key).cloned()
    }

    pub async fn contains(&self, key: &K) -> bool {
        self.inner.lock().await.contains(key)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn snapshot(&self) -> Vec<CacheEntry<K, V>> {
        self.inner.lock().await.snapshot()
    }

    pub async fn policy(&self) -> CachePolicy {
        self.inner.lock().await.policy()
    }

    pub async fn capacity(&self) -> Option<usize> {
        self.inner.lock().await.capacity()
    }
}
