//! Cache Store Module
//!
//! The unsynchronized key/value table. Callers wrap it in a lock; see `TtlCache`.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Mapping from key to entry with a fixed TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Maximum age an entry may reach and still be served
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamping it with the current instant.
    ///
    /// An existing entry is discarded unconditionally, including its creation time.
    pub fn add(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the value for `key` if present and not older than the TTL.
    ///
    /// Expired entries are left in place for the sweep to remove.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let now = Instant::now();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(self.ttl, now))
            .map(|entry| entry.value().clone())
    }

    // == Remove Expired ==
    /// Removes all entries older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&mut self) -> usize {
        let now = Instant::now();
        let ttl = self.ttl;
        let before = self.entries.len();

        self.entries
            .retain(|_, entry| !entry.is_expired_at(ttl, now));

        before - self.entries.len()
    }

    // == Length ==
    /// Returns the number of entries physically held, including expired ones
    /// the sweep has not reached yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(2);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new(TTL);

        store.add("a".to_string(), Bytes::from_static(b"1"));
        store.add("b".to_string(), Bytes::from_static(b"2"));

        assert_eq!(store.get("a"), Some(Bytes::from_static(b"1")));
        assert_eq!(store.get("b"), Some(Bytes::from_static(b"2")));
        assert_eq!(store.get("c"), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_empty_value_is_a_hit() {
        let mut store = CacheStore::new(TTL);

        store.add("empty".to_string(), Bytes::new());

        assert_eq!(store.get("empty"), Some(Bytes::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_overwrite_resets_creation_time() {
        let mut store = CacheStore::new(TTL);

        store.add("key".to_string(), Bytes::from_static(b"v1"));
        tokio::time::advance(Duration::from_millis(1500)).await;
        store.add("key".to_string(), Bytes::from_static(b"v2"));
        tokio::time::advance(Duration::from_millis(1500)).await;

        // 3s after the first write but only 1.5s after the second
        assert_eq!(store.get("key"), Some(Bytes::from_static(b"v2")));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_get_hides_expired_entry() {
        let mut store = CacheStore::new(Duration::from_millis(100));

        store.add("u1".to_string(), Bytes::from_static(b"data"));
        tokio::time::advance(Duration::from_millis(150)).await;

        assert_eq!(store.get("u1"), None);
        assert_eq!(store.len(), 1, "Get must not remove entries");
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_remove_expired() {
        let mut store = CacheStore::new(TTL);

        store.add("old".to_string(), Bytes::from_static(b"1"));
        tokio::time::advance(Duration::from_millis(1500)).await;
        store.add("new".to_string(), Bytes::from_static(b"2"));
        tokio::time::advance(Duration::from_millis(1000)).await;

        let removed = store.remove_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("new"), Some(Bytes::from_static(b"2")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_remove_expired_keeps_entry_at_exact_ttl() {
        let mut store = CacheStore::new(TTL);

        store.add("key".to_string(), Bytes::from_static(b"v"));
        tokio::time::advance(TTL).await;

        assert_eq!(store.remove_expired(), 0);
        assert!(store.get("key").is_some());
    }
}
