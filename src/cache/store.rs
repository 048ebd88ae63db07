//! Cache Store Module
//!
//! Unsynchronized cache engine combining HashMap storage with LRU tracking.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::trace;

use crate::cache::{CacheStats, LruTracker};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Fixed-capacity key-value storage with LRU eviction.
///
/// `entries` and `lru` always hold the same key set; every mutation goes
/// through methods that update both. Callers needing shared access wrap the
/// store in a lock (see [`crate::LruCache`]).
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// LRU access tracker
    lru: LruTracker<K>,
    /// Activity counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity` entries.
    ///
    /// Returns `InvalidCapacity` for a zero capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            lru: LruTracker::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Set ==
    /// Stores a key-value pair and marks the key most recently used.
    ///
    /// An existing key is overwritten in place and never causes an eviction.
    /// A new key arriving at capacity first evicts the least recently used
    /// entry, whose key is returned.
    pub fn set(&mut self, key: K, value: V) -> Option<K> {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            self.lru.touch(&key);
            self.stats.record_update();
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        self.lru.touch(&key);
        self.entries.insert(key, value);
        self.stats.record_insertion();
        self.stats.set_total_entries(self.entries.len());

        evicted
    }

    // == Get ==
    /// Retrieves a value by key, promoting the key to most recently used.
    pub fn get(&mut self, key: &K) -> Result<&V> {
        match self.entries.get(key) {
            Some(value) => {
                self.lru.touch(key);
                self.stats.record_hit();
                trace!("cache hit");
                Ok(value)
            }
            None => {
                self.stats.record_miss();
                trace!("cache miss");
                Err(CacheError::NotFound)
            }
        }
    }

    // == Peek ==
    /// Looks up a value without touching the recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Checks for a key without touching the recency order.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.lru
            .iter()
            .filter_map(move |key| self.entries.get(key).map(|value| (key, value)))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict_oldest(&mut self) -> Option<K> {
        let key = self.lru.evict_oldest()?;
        self.entries.remove(&key);
        self.stats.record_eviction();
        Some(key)
    }

    /// Both halves hold the same key set.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.entries.len() == self.lru.len()
            && self.entries.keys().all(|key| self.lru.contains(key))
            && self.lru.iter().count() == self.lru.len()
    }
}

// == Snapshot Rendering ==
/// Renders every value followed by one space, most recently used first.
impl<K, V> fmt::Display for CacheStore<K, V>
where
    K: Eq + Hash + Clone,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, value) in self.iter() {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}
