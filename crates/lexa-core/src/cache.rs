//! Bounded per-word lookup cache
//!
//! Fixed capacity, least recently used entries are evicted first. Shared by
//! reference between whichever tasks perform lookups.

use std::sync::atomic::{AtomicU64, Ordering};

use moka::policy::EvictionPolicy;
use moka::sync::Cache;

/// Default number of entries per cache
pub const DEFAULT_CAPACITY: u64 = 512;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

impl std::ops::Add for CacheStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
            entries: self.entries + other.entries,
        }
    }
}

pub struct LookupCache<V> {
    cache: Cache<String, V>,
    capacity: u64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<V> std::fmt::Debug for LookupCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.cache.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl<V> LookupCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .eviction_policy(EvictionPolicy::lru())
            .build();

        Self {
            cache,
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let value = self.cache.get(key);
        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        value
    }

    pub fn insert(&self, key: String, value: V) {
        self.cache.insert(key, value);
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Entry count after pending evictions have been applied
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_and_miss_are_counted() {
        let cache = LookupCache::new(8);
        assert_eq!(cache.get("word"), None);

        cache.insert("word".to_string(), 1u32);
        assert_eq!(cache.get("word"), Some(1));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn never_exceeds_capacity() {
        let cache = LookupCache::new(4);
        for i in 0..32u32 {
            cache.insert(format!("word{i}"), i);
        }
        assert!(cache.len() <= cache.capacity());
        assert!(!cache.is_empty());
    }

    #[test]
    fn latest_insert_survives_eviction() {
        let cache = LookupCache::new(2);
        for i in 0..10u32 {
            cache.insert(format!("word{i}"), i);
            cache.len();
        }
        assert_eq!(cache.get("word9"), Some(9));
    }

    #[test]
    fn recently_read_entry_outlives_older_one() {
        let cache = LookupCache::new(2);
        cache.insert("a".to_string(), 1u32);
        cache.insert("b".to_string(), 2);
        cache.len();

        assert_eq!(cache.get("a"), Some(1));
        cache.insert("c".to_string(), 3);
        cache.len();

        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c"), Some(3));
    }
}
