//! Generic keyed TTL cache
//!
//! Entries carry their own TTL so resources with different refresh
//! policies can share one cache. No eviction strategy beyond TTL
//! expiration on access.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

struct Entry<V> {
    stamped: Instant,
    ttl: Duration,
    value: V,
}

impl<V> Entry<V> {
    fn is_expired(&self) -> bool {
        self.stamped.elapsed() >= self.ttl
    }
}

/// TTL cache mapping a request identity to a value and timestamp
pub struct TtlCache<K, V> {
    map: HashMap<K, Entry<V>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Insert or overwrite a value, stamping it with the current time
    pub fn insert(&mut self, key: K, value: V, ttl: Duration) {
        self.map.insert(
            key,
            Entry {
                stamped: Instant::now(),
                ttl,
                value,
            },
        );
    }

    /// Fetch a live value; expired entries are eagerly removed
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if self.map.get(key).is_some_and(Entry::is_expired) {
            self.map.remove(key);
            return None;
        }
        self.map.get(key).map(|entry| &entry.value)
    }

    /// Age of a live entry, if present
    pub fn age(&self, key: &K) -> Option<Duration> {
        self.map
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.stamped.elapsed())
    }

    pub fn invalidate(&mut self, key: &K) -> Option<V> {
        self.map.remove(key).map(|entry| entry.value)
    }

    /// Drop every expired entry
    pub fn purge_expired(&mut self) {
        self.map.retain(|_, entry| !entry.is_expired());
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Number of entries, expired ones included until purged
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
