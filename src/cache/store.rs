//! Cache Store Module
//!
//! The unsynchronized map behind `TimedCache`. Every method here runs while
//! the caller holds the cache's mutex.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage with hit/miss accounting and TTL sweeping.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores a payload under `key`, replacing any previous entry and
    /// restarting its age.
    pub fn add(&mut self, key: String, value: Bytes) {
        self.insert_entry(key, CacheEntry::new(value));
    }

    /// Stores a prebuilt entry. Used where the creation instant must be
    /// controlled.
    pub fn insert_entry(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the payload stored under `key`.
    ///
    /// Presence alone decides the answer: an entry past its TTL is still
    /// returned until a sweep removes it, and reading never extends its life.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry created strictly before `now - ttl`.
    ///
    /// All entries are judged against the same `now`. Returns the number of
    /// entries removed.
    pub fn reap(&mut self, now: Instant, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(now, ttl));
        let removed = before - self.entries.len();

        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
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
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn payload(s: &'static str) -> Bytes {
        Bytes::from_static(s.as_bytes())
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new();

        store.add("pokemon:1".to_string(), payload("Pikachu"));

        assert_eq!(store.get("pokemon:1"), Some(payload("Pikachu")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new();
        assert_eq!(store.get("pokemon:2"), None);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.add("pokemon:1".to_string(), payload("Pikachu"));
        store.add("pokemon:1".to_string(), payload("Raichu"));

        assert_eq!(store.get("pokemon:1"), Some(payload("Raichu")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_empty_key_and_value() {
        let mut store = CacheStore::new();
        store.add(String::new(), Bytes::new());
        assert_eq!(store.get(""), Some(Bytes::new()));
    }

    #[test]
    fn test_store_reap_uses_single_cutoff() {
        let mut store = CacheStore::new();
        let now = Instant::now();
        let ttl = Duration::from_secs(1);

        store.insert_entry(
            "old".to_string(),
            CacheEntry::created_at(payload("a"), now - Duration::from_millis(1500)),
        );
        store.insert_entry(
            "boundary".to_string(),
            CacheEntry::created_at(payload("b"), now - ttl),
        );
        store.insert_entry(
            "fresh".to_string(),
            CacheEntry::created_at(payload("c"), now - Duration::from_millis(200)),
        );

        let removed = store.reap(now, ttl);

        assert_eq!(removed, 1);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("boundary"), Some(payload("b")));
        assert_eq!(store.get("fresh"), Some(payload("c")));
    }

    #[test]
    fn test_store_get_does_not_refresh() {
        let mut store = CacheStore::new();
        let created = Instant::now();
        let ttl = Duration::from_secs(1);

        store.insert_entry("k".to_string(), CacheEntry::created_at(payload("v"), created));

        // Reading close to expiry must not move the entry's creation time
        assert!(store.get("k").is_some());
        assert_eq!(store.reap(created + Duration::from_millis(1001), ttl), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_stale_entry_visible_until_reaped() {
        let mut store = CacheStore::new();
        let ttl = Duration::from_millis(10);
        store.insert_entry(
            "k".to_string(),
            CacheEntry::created_at(payload("v"), Instant::now() - Duration::from_secs(2)),
        );

        assert_eq!(store.get("k"), Some(payload("v")));
        store.reap(Instant::now(), ttl);
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new();
        let now = Instant::now();

        store.add("key1".to_string(), payload("value1"));
        store.insert_entry(
            "key2".to_string(),
            CacheEntry::created_at(payload("value2"), now - Duration::from_secs(2)),
        );
        store.get("key1"); // hit
        store.get("nonexistent"); // miss
        store.reap(now, Duration::from_secs(1));

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.reaped, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
