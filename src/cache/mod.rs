//! Cache Module
//!
//! Provides a fixed-capacity key-value cache with LRU eviction.

mod lru;
mod stats;
mod store;
mod sync;


use std::sync::Arc;

// Re-export public types
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use sync::LruCache;

/// Called with the key of each entry evicted under capacity pressure.
pub type EvictCallback<K> = Arc<dyn Fn(&K) + Send + Sync>;
