//! Error types for the policy cache
//!
//! Provides unified error handling using thiserror. The caches themselves
//! never fail on `put`/`get`; errors come from construction and from the
//! HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the policy cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Bounded caches need at least one slot
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Policy name could not be parsed
    #[error("Unknown cache policy: {0}")]
    UnknownPolicy(String),

    /// Key not found in cache (HTTP surface only)
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::InvalidCapacity(_) | CacheError::UnknownPolicy(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the policy cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::InvalidCapacity(0).to_string(),
            "Invalid capacity: 0 (must be at least 1)"
        );
        assert_eq!(
            CacheError::UnknownPolicy("lru".to_string()).to_string(),
            "Unknown cache policy: lru"
        );
        assert_eq!(
            CacheError::NotFound("a".to_string()).to_string(),
            "Key not found: a"
        );
    }

    #[test]
    fn test_error_status_codes() {
        let response = CacheError::NotFound("a".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = CacheError::InvalidRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = CacheError::InvalidCapacity(0).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
