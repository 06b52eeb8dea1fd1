//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Longest key accepted over HTTP, in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Request body for the PUT operation (PUT /put)
///
/// # Fields
/// - `key`: The cache key; absent or `null` means "missing"
/// - `value`: The value to store; absent or `null` means "missing"
///
/// A request with a missing key or value is accepted and ignored by the cache.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PutRequest {
    /// The cache key
    #[serde(default)]
    pub key: Option<String>,
    /// The value to store
    #[serde(default)]
    pub value: Option<String>,
}

impl PutRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid. Only a
    /// request carrying both a key and a value is checked; anything else is
    /// ignored by the cache and never rejected.
    pub fn validate(&self) -> Option<String> {
        if self.value.is_none() {
            return None;
        }
        match self.key.as_deref() {
            Some("") => Some("Key cannot be empty".to_string()),
            Some(key) if key.len() > MAX_KEY_LENGTH => Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )),
            _ => None,
        }
    }
}
