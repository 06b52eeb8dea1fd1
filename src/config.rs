//! Configuration Module
//!
//! Handles loading and validating server configuration from environment variables.

use std::env;

use crate::cache::{CachePolicy, DEFAULT_CAPACITY};
use crate::error::{CacheError, Result};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Eviction policy name, parsed by [`Config::validate`]
    pub policy: String,
    /// Maximum number of keys for bounded policies
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_POLICY` - `basic`, `fifo` or `lifo` (default: fifo)
    /// - `CACHE_CAPACITY` - Maximum keys for bounded policies (default: 4)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            policy: env::var("CACHE_POLICY").unwrap_or(defaults.policy),
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.capacity),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Checks the policy name and capacity, returning the parsed policy.
    ///
    /// Capacity only matters for bounded policies, so a zero capacity with
    /// `basic` is accepted.
    pub fn validate(&self) -> Result<CachePolicy> {
        let policy: CachePolicy = self.policy.parse()?;
        if policy != CachePolicy::Basic && self.capacity == 0 {
            return Err(CacheError::InvalidCapacity(self.capacity));
        }
        Ok(policy)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: CachePolicy::Fifo.to_string(),
            capacity: DEFAULT_CAPACITY,
            server_port: 3000,
        }
    }
}
