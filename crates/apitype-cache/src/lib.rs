//! Bounded, concurrency-safe LRU cache with overflow tolerance.
//!
//! [`OverflowingLruCache`] maps keys to built structures. Every successful
//! `get`/`put` refreshes the entry's recency. The cache tolerates growing
//! past its space limit by a configured overflow; once the overflow is
//! exceeded, least-recently-used entries are evicted until the live count is
//! back at the space limit. Batching evictions this way keeps churn low when
//! the working set hovers around the limit.
//!
//! All operations are linearizable per cache instance (one internal lock).
//! There is no live iterator: [`keys_snapshot`](OverflowingLruCache::keys_snapshot)
//! and [`elements_snapshot`](OverflowingLruCache::elements_snapshot) return
//! point-in-time copies that are safe to walk while other threads mutate the
//! cache. The cache never performs I/O or calls back into collaborators
//! while holding its lock.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

struct Entry<V> {
    value: V,
    /// Monotonic use counter; larger means more recently used.
    last_use: u64,
}

struct Inner<K, V> {
    entries: HashMap<K, Entry<V>>,
    space_limit: usize,
    tick: u64,
}

impl<K: Eq + Hash + Clone, V: Clone> Inner<K, V> {
    fn touch(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Evict least-recently-used entries until `len <= target`.
    fn evict_down_to(&mut self, target: usize) {
        let excess = self.entries.len().saturating_sub(target);
        if excess == 0 {
            return;
        }
        let mut by_age: Vec<(K, u64)> = self
            .entries
            .iter()
            .map(|(k, e)| (k.clone(), e.last_use))
            .collect();
        by_age.sort_by_key(|(_, last_use)| *last_use);
        for (key, _) in by_age.into_iter().take(excess) {
            self.entries.remove(&key);
        }
        debug!(evicted = excess, live = self.entries.len(), "cache eviction");
    }
}

/// An LRU cache bounded by `space_limit + overflow` live entries.
pub struct OverflowingLruCache<K, V> {
    inner: Mutex<Inner<K, V>>,
    overflow: usize,
}

impl<K: Eq + Hash + Clone, V: Clone> OverflowingLruCache<K, V> {
    /// Create a cache with the default overflow tolerance of half the space
    /// limit.
    pub fn new(space_limit: usize) -> Self {
        Self::with_overflow(space_limit, space_limit / 2)
    }

    /// Create a cache with an explicit overflow tolerance.
    pub fn with_overflow(space_limit: usize, overflow: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                space_limit,
                tick: 0,
            }),
            overflow,
        }
    }

    /// Look up a key, refreshing its recency on a hit.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut inner = self.inner.lock();
        let tick = inner.touch();
        let entry = inner.entries.get_mut(key)?;
        entry.last_use = tick;
        Some(entry.value.clone())
    }

    /// Insert a value, returning the previous value for the key if any.
    ///
    /// The inserted entry becomes most-recently-used. May trigger a batch
    /// eviction when the live count exceeds `space_limit + overflow`.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        let mut inner = self.inner.lock();
        let tick = inner.touch();
        let previous = inner
            .entries
            .insert(
                key,
                Entry {
                    value,
                    last_use: tick,
                },
            )
            .map(|e| e.value);
        if inner.entries.len() > inner.space_limit + self.overflow {
            let target = inner.space_limit;
            inner.evict_down_to(target);
        }
        previous
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().entries.remove(key).map(|e| e.value)
    }

    /// Drop all entries.
    pub fn flush(&self) {
        self.inner.lock().entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn space_limit(&self) -> usize {
        self.inner.lock().space_limit
    }

    /// Change the space limit, evicting immediately down to the new limit
    /// if the cache is over it.
    pub fn set_space_limit(&self, space_limit: usize) {
        let mut inner = self.inner.lock();
        inner.space_limit = space_limit;
        inner.evict_down_to(space_limit);
    }

    /// Point-in-time copy of the live keys, most-recently-used first.
    pub fn keys_snapshot(&self) -> Vec<K> {
        let inner = self.inner.lock();
        let mut pairs: Vec<(K, u64)> = inner
            .entries
            .iter()
            .map(|(k, e)| (k.clone(), e.last_use))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs.into_iter().map(|(k, _)| k).collect()
    }

    /// Point-in-time copy of the live values, most-recently-used first.
    pub fn elements_snapshot(&self) -> Vec<V> {
        let inner = self.inner.lock();
        let mut pairs: Vec<(V, u64)> = inner
            .entries
            .values()
            .map(|e| (e.value.clone(), e.last_use))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs.into_iter().map(|(v, _)| v).collect()
    }
}
