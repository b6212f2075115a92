//! Bounded, thread-safe memoization cache.
//!
//! One `MemoCache` per operation, keyed by that operation's argument tuple.
//! Entries are never mutated after insertion: engine results are pure
//! functions of their inputs, so eviction only affects latency, never
//! observable values. Caches are process-local and not persisted.

use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;
use num_bigint::BigInt;
use parking_lot::Mutex;

/// Bounded LRU cache from an argument key to a computed result.
///
/// When the capacity bound is exceeded, the least-recently-used entry is
/// evicted. All access goes through one mutex so concurrent insert/evict
/// sequences cannot corrupt the bound or lose entries.
pub struct MemoCache<K: Hash + Eq> {
    inner: Mutex<LruCache<K, BigInt>>,
}

impl<K: Hash + Eq> MemoCache<K> {
    /// Create a cache holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Self {
            inner: Mutex::new(LruCache::new(cap)),
        }
    }

    /// Look up `key`, marking it most recently used on a hit.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<BigInt> {
        self.inner.lock().get(key).cloned()
    }

    /// Insert a computed result, evicting the least-recently-used entry if
    /// the cache is full.
    pub fn put(&self, key: K, value: BigInt) {
        self.inner.lock().put(key, value);
    }

    /// Whether `key` is cached, without touching recency.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
