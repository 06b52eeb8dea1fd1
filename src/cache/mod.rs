//! Cache Module
//!
//! Bounded in-memory key-value caches with pluggable eviction policies.

mod entry;
mod fifo;
mod lifo;
mod order;
mod policy;
mod shared;
mod stats;
mod store;
mod traits;
mod unbounded;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use fifo::FifoCache;
pub use lifo::LifoCache;
pub use order::OrderIndex;
pub use policy::{CachePolicy, PolicyCache};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use traits::Cache;
pub use unbounded::UnboundedCache;

use crate::error::{CacheError, Result};

// == Public Constants ==
/// Number of keys a bounded cache holds unless told otherwise
pub const DEFAULT_CAPACITY: usize = 4;

/// Rejects capacities that could never hold a key.
pub(crate) fn validate_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(CacheError::InvalidCapacity(capacity));
    }
    Ok(capacity)
}
