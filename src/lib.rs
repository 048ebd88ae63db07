//! Sync LRU - A fixed-capacity, thread-safe key-value cache
//!
//! Keeps a lookup table and a recency order under one lock, evicting the
//! least recently used entry when a new key arrives at capacity.
//!
//! ```
//! use sync_lru::LruCache;
//!
//! let cache = LruCache::new(2, None).unwrap();
//! cache.set(1, "one");
//! cache.set(2, "two");
//! assert_eq!(cache.get(&1).unwrap(), "one");
//!
//! cache.set(3, "three"); // evicts key 2
//! assert_eq!(cache.to_string(), "three one ");
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, EvictCallback, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
