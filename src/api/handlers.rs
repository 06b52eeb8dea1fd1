//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    EntriesResponse, GetResponse, HealthResponse, PutRequest, PutResponse, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache
    pub cache: SharedCache<String, String>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: SharedCache<String, String>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails once, here, if the policy or capacity is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let policy = config.validate()?;
        Ok(Self::new(SharedCache::with_policy(policy, config.capacity)?))
    }
}

/// Handler for PUT /put
///
/// Stores a key-value pair. A missing key or value is not an error: the
/// cache ignores it and the response reports `stored: false`.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let response = match (req.key, req.value) {
        (Some(key), Some(value)) => {
            let discarded = state.cache.insert(key.clone(), value).await;
            PutResponse::stored(key, discarded)
        }
        (key, value) => {
            state.cache.put(key.clone(), value).await;
            PutResponse::ignored(key)
        }
    };

    Ok(Json(response))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key; unknown keys map to 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache
        .get(&key)
        .await
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /entries
///
/// Lists the cache contents in eviction order.
pub async fn entries_handler(State(state): State<AppState>) -> Json<EntriesResponse> {
    Json(EntriesResponse::new(
        state.cache.policy().await,
        state.cache.capacity().await,
        state.cache.snapshot().await,
    ))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
