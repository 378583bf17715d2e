//! Cache Module
//!
//! Provides fixed-capacity in-memory caching with LRU eviction.

mod entry;
mod prime;
mod queue;
mod stats;
mod store;


// Re-export public types
pub use queue::{QueueHandle, RecencyQueue};
pub use stats::CacheStats;
pub use store::LruCache;
