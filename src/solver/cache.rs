//! Capacity-bounded memo cache keyed by candidate-set identity
//!
//! Keys are the sorted index sequence of a candidate set, hashed structurally.
//! When the cache is full a fixed fraction of the oldest insertions is dropped
//! (FIFO, not LRU). A dropped entry is simply recomputed on its next lookup.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::ops::AddAssign;
use std::sync::Arc;

/// Counters describing how a cache has been used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    /// Number of times the cache was full and had to evict
    pub evictions: u64,
    /// Total entries dropped across all evictions
    pub evicted_entries: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

impl AddAssign for CacheStats {
    fn add_assign(&mut self, other: Self) {
        self.hits += other.hits;
        self.misses += other.misses;
        self.insertions += other.insertions;
        self.evictions += other.evictions;
        self.evicted_entries += other.evicted_entries;
    }
}

/// FIFO-evicting memo table
///
/// # Examples
/// ```
/// use wordle_expectimax::solver::MemoCache;
///
/// let mut cache = MemoCache::new(2, 0.5);
/// cache.put(&[0, 1], 1.5);
/// cache.put(&[2, 3], 1.5);
/// cache.put(&[4, 5], 2.0); // full: the oldest half is dropped first
///
/// assert_eq!(cache.get(&[0, 1]), None);
/// assert_eq!(cache.get(&[4, 5]), Some(2.0));
/// assert_eq!(cache.stats().evictions, 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemoCache<V> {
    entries: FxHashMap<Arc<[usize]>, V>,
    order: VecDeque<Arc<[usize]>>,
    capacity: usize,
    evict_fraction: f64,
    stats: CacheStats,
}

impl<V: Clone> MemoCache<V> {
    /// Create a cache holding at most `capacity` entries
    ///
    /// A capacity of 0 disables caching: every lookup misses and nothing is stored.
    #[must_use]
    pub fn new(capacity: usize, evict_fraction: f64) -> Self {
        Self {
            entries: FxHashMap::default(),
            order: VecDeque::new(),
            capacity,
            evict_fraction,
            stats: CacheStats::default(),
        }
    }

    /// Look up the value stored for a sorted index sequence
    pub fn get(&mut self, key: &[usize]) -> Option<V> {
        if let Some(value) = self.entries.get(key) {
            self.stats.hits += 1;
            Some(value.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Store a value, evicting the oldest entries first if the cache is full
    pub fn put(&mut self, key: &[usize], value: V) {
        if self.capacity == 0 {
            return;
        }

        if let Some(existing) = self.entries.get_mut(key) {
            *existing = value;
            return;
        }

        if self.entries.len() >= self.capacity {
            self.evict();
        }

        let key: Arc<[usize]> = Arc::from(key);
        self.order.push_back(Arc::clone(&key));
        self.entries.insert(key, value);
        self.stats.insertions += 1;
    }

    /// Number of entries dropped per eviction event
    fn batch_size(&self) -> usize {
        let batch = (self.capacity as f64 * self.evict_fraction).ceil() as usize;
        batch.clamp(1, self.capacity.max(1))
    }

    fn evict(&mut self) {
        let batch = self.batch_size().min(self.order.len());
        for key in self.order.drain(..batch) {
            self.entries.remove(&key);
        }

        self.stats.evictions += 1;
        self.stats.evicted_entries += batch as u64;
        log::debug!(
            "memo cache full: evicted {batch} of {} entries",
            self.capacity
        );
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Usage counters since construction
    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every entry, keeping the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
