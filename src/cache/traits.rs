//! Cache Trait
//!
//! The `put`/`get` contract shared by every eviction policy.

use crate::cache::{CacheEntry, CacheStats};

/// Behaviour common to all caches.
///
/// Implementations own their storage and any order tracking. No call ever
/// fails: a full cache evicts instead of rejecting, and an unknown key is
/// simply `None`.
pub trait Cache<K, V> {
    /// Inserts or overwrites `key`, returning the key discarded by the
    /// eviction policy, if any.
    fn insert(&mut self, key: K, value: V) -> Option<K>;

    /// Like [`Cache::insert`], but `None` for either argument marks it as
    /// missing and turns the call into a no-op that returns `None`.
    ///
    /// The only trace a skipped call leaves is the `ignored_puts` counter in
    /// [`Cache::stats`]; contents and order are untouched.
    fn put(&mut self, key: Option<K>, value: Option<V>) -> Option<K>;

    /// Looks up a value. Lookups never change eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of distinct keys, or `None` when unbounded.
    fn capacity(&self) -> Option<usize>;

    fn stats(&self) -> CacheStats;

    /// Copies the contents, front of the eviction order first.
    fn snapshot(&self) -> Vec<CacheEntry<K, V>>
    where
        K: Clone,
        V: Clone;
}
