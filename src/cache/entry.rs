//! Cache Entry Module
//!
//! Defines the (key, value) pair handed out by cache snapshots.

use serde::Serialize;

// == Cache Entry ==
/// A single key and the value stored under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntry<K, V> {
    /// The entry key
    pub key: K,
    /// The stored value, untouched by the cache
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry back into its parts.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for CacheEntry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("key", 7);
        assert_eq!(entry.key, "key");
        assert_eq!(entry.value, 7);
        assert_eq!(entry.into_pair(), ("key", 7));
    }

    #[test]
    fn test_entry_from_tuple() {
        let entry: CacheEntry<&str, &str> = ("a", "1").into();
        assert_eq!(entry, CacheEntry::new("a", "1"));
    }

    #[test]
    fn test_entry_serializes_as_object() {
        let entry = CacheEntry::new("a".to_string(), "1".to_string());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["key"], "a");
        assert_eq!(json["value"], "1");
    }
}
