//! Concurrent LRU Cache
//!
//! Wraps a [`CacheStore`] and its eviction hook behind a single lock so the
//! table and recency order are always observed together.

use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheStore, EvictCallback};
use crate::config::Config;
use crate::error::Result;

/// State guarded by the cache lock.
struct Inner<K, V> {
    store: CacheStore<K, V>,
    on_evict: Option<EvictCallback<K>>,
}

// == LRU Cache ==
/// Thread-safe, fixed-capacity key-value cache with LRU eviction.
///
/// Both `set` and `get` take the lock exclusively, since a read still
/// promotes the key. Snapshot operations take it shared.
///
/// The eviction callback runs on the thread that called `set`, after the
/// lock is released. It may call back into the cache, but a slow callback
/// still delays that `set` call; hand work off to a queue if needed.
pub struct LruCache<K, V> {
    inner: RwLock<Inner<K, V>>,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Clone,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, must be at least 1
    /// * `on_evict` - Optional hook called with each key evicted under capacity pressure
    pub fn new(capacity: usize, on_evict: Option<EvictCallback<K>>) -> Result<Self> {
        let store = CacheStore::new(capacity).map_err(|err| {
            warn!(capacity, "rejected cache construction: {}", err);
            err
        })?;

        info!(
            capacity,
            evict_hook = on_evict.is_some(),
            "LRU cache created"
        );

        Ok(Self {
            inner: RwLock::new(Inner { store, on_evict }),
        })
    }

    /// Creates a cache sized from configuration.
    pub fn from_config(config: &Config, on_evict: Option<EvictCallback<K>>) -> Result<Self> {
        Self::new(config.capacity, on_evict)
    }

    // == Set ==
    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// Inserting a new key into a full cache evicts exactly one entry, the
    /// least recently used, and reports it to the eviction callback.
    pub fn set(&self, key: K, value: V) {
        let evicted = {
            let mut inner = self.inner.write();
            inner
                .store
                .set(key, value)
                .map(|evicted| (evicted, inner.on_evict.clone()))
        };

        if let Some((key, callback)) = evicted {
            debug!(?key, "evicted least recently used entry");
            if let Some(callback) = callback {
                callback(&key);
            }
        }
    }

    // == Get ==
    /// Returns a copy of the value for `key` and marks it most recently used.
    ///
    /// Fails with `NotFound` when the key is absent; nothing changes then.
    pub fn get(&self, key: &K) -> Result<V> {
        self.inner.write().store.get(key).cloned()
    }

    // == Close ==
    /// Detaches the eviction callback.
    ///
    /// Entries are kept and the cache stays usable; later evictions are
    /// simply not reported.
    pub fn close(&self) {
        if self.inner.write().on_evict.take().is_some() {
            debug!("eviction callback detached");
        }
    }

    /// Checks for a key without promoting it.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().store.contains_key(key)
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> Vec<K> {
        self.inner
            .read()
            .store
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.read().store.stats()
    }

    pub fn len(&self) -> usize {
        self.inner.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().store.capacity()
    }
}

// == Snapshot Rendering ==
/// Values in recency order, most recent first, each followed by one space.
impl<K, V> fmt::Display for LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        fmt::Display::fmt(&inner.store, f)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("LruCache")
            .field("capacity", &inner.store.capacity())
            .field("len", &inner.store.len())
            .field("evict_hook", &inner.on_evict.is_some())
            .finish()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use std::sync::{Arc, Mutex, OnceLock, Weak};

    fn recording_callback() -> (EvictCallback<i32>, Arc<Mutex<Vec<i32>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let callback: EvictCallback<i32> = Arc::new(move |key: &i32| {
            sink.lock().unwrap().push(*key);
        });
        (callback, seen)
    }

    #[test]
    fn test_new_rejects_zero_capacity() {
        let result = LruCache::<i32, String>::new(0, None);
        assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
    }

    #[test]
    fn test_from_config() {
        let cache = LruCache::<i32, String>::from_config(&Config::with_capacity(7), None).unwrap();
        assert_eq!(cache.capacity(), 7);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_get_returns_clone_and_promotes() {
        let cache = LruCache::new(2, None).unwrap();
        cache.set(1, "one".to_string());
        cache.set(2, "two".to_string());

        assert_eq!(cache.get(&1).unwrap(), "one");
        assert_eq!(cache.keys(), vec![1, 2]);
        assert_eq!(cache.get(&3), Err(CacheError::NotFound));
    }

    #[test]
    fn test_contains_key_does_not_promote() {
        let cache = LruCache::new(2, None).unwrap();
        cache.set(1, "one".to_string());
        cache.set(2, "two".to_string());

        assert!(cache.contains_key(&1));
        cache.set(3, "three".to_string());
        assert!(!cache.contains_key(&1));
    }

    #[test]
    fn test_callback_receives_evicted_key() {
        let (callback, seen) = recording_callback();
        let cache = LruCache::new(2, Some(callback)).unwrap();

        cache.set(1, "a");
        cache.set(2, "b");
        cache.set(1, "c"); // update, no eviction
        cache.set(3, "d"); // evicts 2

        assert_eq!(*seen.lock().unwrap(), vec![2]);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_close_detaches_callback_only() {
        let (callback, seen) = recording_callback();
        let cache = LruCache::new(1, Some(callback)).unwrap();

        cache.set(1, "a");
        cache.close();
        cache.set(2, "b");

        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(cache.get(&2).unwrap(), "b");
        assert_eq!(cache.to_string(), "b ");

        // Closing twice is harmless
        cache.close();
    }

    #[test]
    fn test_callback_may_reenter_cache() {
        let slot: Arc<OnceLock<Weak<LruCache<i32, String>>>> = Arc::new(OnceLock::new());
        let observed = Arc::new(Mutex::new(Vec::new()));

        let callback: EvictCallback<i32> = {
            let slot = slot.clone();
            let observed = observed.clone();
            Arc::new(move |key: &i32| {
                if let Some(cache) = slot.get().and_then(Weak::upgrade) {
                    observed.lock().unwrap().push((*key, cache.contains_key(key), cache.len()));
                }
            })
        };

        let cache = Arc::new(LruCache::new(1, Some(callback)).unwrap());
        slot.set(Arc::downgrade(&cache)).unwrap();

        cache.set(1, "one".to_string());
        cache.set(2, "two".to_string());

        assert_eq!(*observed.lock().unwrap(), vec![(1, false, 1)]);
    }

    #[test]
    fn test_debug_output() {
        let cache = LruCache::<i32, String>::new(4, None).unwrap();
        let rendered = format!("{:?}", cache);
        assert!(rendered.contains("capacity: 4"));
        assert!(rendered.contains("evict_hook: false"));
    }
}
