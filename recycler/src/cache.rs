//! Bounded LRU store of retired item views, keyed by item index.

use lru::LruCache;

/// Statistics about recycle cache usage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    /// `take` calls that returned a handle.
    pub hits: u64,
    /// `take` calls that found nothing.
    pub misses: u64,
    /// Handles disposed because of capacity pressure or `clear`.
    pub evictions: u64,
    /// Current number of entries.
    pub len: usize,
    /// Maximum number of entries.
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of retired view handles.
///
/// "Use" means being put into or taken out of the cache, so the eviction victim is always the
/// handle that was retired longest ago. Every handle that leaves through eviction or
/// [`Self::clear`] is passed to the `dispose` callback exactly once; handles leaving through
/// [`Self::take`] are handed back to the caller instead.
///
/// A capacity of `0` is valid: every `put` disposes the handle immediately.
pub struct RecycleCache<H> {
    entries: LruCache<usize, H>,
    capacity: usize,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<H> RecycleCache<H> {
    pub fn new(capacity: usize) -> Self {
        Self {
            // Capacity is enforced here rather than by `LruCache`, so evicted handles can be
            // routed through `dispose` and `0` stays representable.
            entries: LruCache::unbounded(),
            capacity,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Parks `handle` under `index`, evicting the least recently used entry first when full.
    pub fn put(&mut self, index: usize, handle: H, mut dispose: impl FnMut(usize, H)) {
        if self.capacity == 0 {
            self.evictions += 1;
            dispose(index, handle);
            return;
        }
        debug_assert!(
            !self.entries.contains(&index),
            "RecycleCache::put: index {index} is already cached"
        );
        while self.entries.len() >= self.capacity {
            let Some((victim, old)) = self.entries.pop_lru() else {
                break;
            };
            rtrace!(victim, "recycle cache evict");
            self.evictions += 1;
            dispose(victim, old);
        }
        if let Some((replaced, old)) = self.entries.push(index, handle) {
            self.evictions += 1;
            dispose(replaced, old);
        }
    }

    /// Removes and returns the handle cached under `index`. A miss is a normal outcome.
    pub fn take(&mut self, index: usize) -> Option<H> {
        let handle = self.entries.pop(&index);
        if handle.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        handle
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains(&index)
    }

    /// Changes the bound, evicting least recently used entries immediately when shrinking below
    /// the current size.
    pub fn set_capacity(&mut self, capacity: usize, mut dispose: impl FnMut(usize, H)) {
        self.capacity = capacity;
        while self.entries.len() > capacity {
            let Some((victim, old)) = self.entries.pop_lru() else {
                break;
            };
            self.evictions += 1;
            dispose(victim, old);
        }
    }

    /// Disposes every entry.
    pub fn clear(&mut self, mut dispose: impl FnMut(usize, H)) {
        while let Some((index, handle)) = self.entries.pop_lru() {
            self.evictions += 1;
            dispose(index, handle);
        }
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

    /// Cached indices, most recently used first.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(&index, _)| index)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            len: self.entries.len(),
            capacity: self.capacity,
        }
    }

    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
        self.evictions = 0;
    }
}

impl<H> core::fmt::Debug for RecycleCache<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecycleCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .field("evictions", &self.evictions)
            .finish()
    }
}
