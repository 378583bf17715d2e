//! Bounded LRU - a fixed-capacity in-memory cache
//!
//! Provides an associative cache combining chained hashing with
//! least-recently-used eviction. Meant as an embeddable building block
//! (e.g. a memoization layer) for bounding the memory of a key/value
//! working set.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, LruCache, QueueHandle, RecencyQueue};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
