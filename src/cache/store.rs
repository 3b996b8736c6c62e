//! Cache Store Module
//!
//! TTL-keyed payload store with lazy expiry.

use std::collections::HashMap;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheKey, CacheStats};

// == Cache Store ==
/// Maps a derived cache key to the last payload stored under it.
///
/// Expired entries are never swept; they stop being served and are
/// overwritten on the next successful fetch. The store has no capacity
/// bound and no internal locking.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lookup statistics
    stats: CacheStats,
    /// Freshness window in milliseconds
    ttl_ms: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store whose entries stay fresh for `ttl_secs`.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_ms: ttl_secs.saturating_mul(1000),
        }
    }

    // == Get ==
    /// Returns the payload stored under `key` if it is still fresh.
    ///
    /// A present-but-expired entry is a miss and is left in place.
    pub fn get(&mut self, key: &CacheKey) -> Option<V> {
        self.get_at(key, current_timestamp_ms())
    }

    pub(crate) fn get_at(&mut self, key: &CacheKey, now_ms: u64) -> Option<V> {
        match self.entries.get(key.as_str()) {
            Some(entry) if entry.is_fresh(self.ttl_ms, now_ms) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Inserts or overwrites the payload for `key`, stamping the current time.
    pub fn set(&mut self, key: CacheKey, value: V) {
        self.set_at(key, value, current_timestamp_ms());
    }

    pub(crate) fn set_at(&mut self, key: CacheKey, value: V, now_ms: u64) {
        self.entries
            .insert(key.into(), CacheEntry::with_timestamp(value, now_ms));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Drops every entry and resets statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.reset();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Freshness window in seconds.
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_ms / 1000
    }

    // == Length ==
    /// Returns the number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(name: &str) -> CacheKey {
        CacheKey::derive("test", &json!({ "name": name })).unwrap()
    }

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new(300);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl_secs(), 300);
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new(300);

        store.set(key("a"), "value1".to_string());
        assert_eq!(store.get(&key("a")), Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new(300);
        assert!(store.get(&key("missing")).is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(300);

        store.set(key("a"), "value1".to_string());
        store.set(key("a"), "value2".to_string());

        assert_eq!(store.get(&key("a")), Some("value2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration_is_lazy() {
        let mut store = CacheStore::new(60);

        store.set_at(key("a"), 7, 1_000);
        assert_eq!(store.get_at(&key("a"), 60_999), Some(7));

        // Expired: not served, but still stored
        assert_eq!(store.get_at(&key("a"), 61_000), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_refreshes_timestamp() {
        let mut store = CacheStore::new(60);

        store.set_at(key("a"), 1, 0);
        assert_eq!(store.get_at(&key("a"), 70_000), None);

        store.set_at(key("a"), 2, 70_000);
        assert_eq!(store.get_at(&key("a"), 70_001), Some(2));
    }

    #[test]
    fn test_store_zero_ttl_never_serves() {
        let mut store = CacheStore::new(0);

        store.set(key("a"), 1);
        assert_eq!(store.get(&key("a")), None);
    }

    #[test]
    fn test_store_clear() {
        let mut store = CacheStore::new(300);

        store.set(key("a"), 1);
        store.set(key("b"), 2);
        store.clear();

        assert!(store.is_empty());
        assert!(store.get(&key("a")).is_none());
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(300);

        store.set(key("a"), 1);
        store.get(&key("a")); // hit
        store.get(&key("b")); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_expired_lookup_counts_as_miss() {
        let mut store = CacheStore::new(1);

        store.set_at(key("a"), 1, 0);
        store.get_at(&key("a"), 5_000);

        assert_eq!(store.stats().misses, 1);
        assert_eq!(store.stats().hits, 0);
    }
}
