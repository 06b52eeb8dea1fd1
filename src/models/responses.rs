//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheEntry, CachePolicy, CacheStats};

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the PUT operation (PUT /put)
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Human readable outcome
    pub message: String,
    /// The key from the request, if any
    pub key: Option<String>,
    /// False when the key or value was missing and the put was ignored
    pub stored: bool,
    /// Key evicted to make room, if any
    pub discarded: Option<String>,
}

impl PutResponse {
    /// Creates a response for a put that reached the cache
    pub fn stored(key: impl Into<String>, discarded: Option<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' stored successfully", key),
            key: Some(key),
            stored: true,
            discarded,
        }
    }

    /// Creates a response for a put skipped because of a missing key or value
    pub fn ignored(key: Option<String>) -> Self {
        Self {
            message: "Missing key or value, nothing stored".to_string(),
            key,
            stored: false,
            discarded: None,
        }
    }
}

/// Response body for the entries endpoint (GET /entries)
#[derive(Debug, Clone, Serialize)]
pub struct EntriesResponse {
    /// Active eviction policy
    pub policy: CachePolicy,
    /// Capacity, `null` for the basic policy
    pub capacity: Option<usize>,
    /// Contents, next eviction candidate first for FIFO, last for LIFO
    pub entries: Vec<CacheEntry<String, String>>,
}

impl EntriesResponse {
    pub fn new(
        policy: CachePolicy,
        capacity: Option<usize>,
        entries: Vec<CacheEntry<String, String>>,
    ) -> Self {
        Self {
            policy,
            capacity,
            entries,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Number of puts ignored for a missing key or value
    pub ignored_puts: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            ignored_puts: stats.ignored_puts,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
