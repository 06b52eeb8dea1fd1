//! Policy Cache - bounded in-memory key-value caches
//!
//! Provides unbounded, FIFO and LIFO caches behind one `Cache` trait, a
//! thread-safe wrapper, and a small HTTP server exposing them.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{Cache, CachePolicy, FifoCache, LifoCache, SharedCache, UnboundedCache};
pub use config::Config;
pub use error::CacheError;
