//! The cache service and its in-memory implementation.

use std::collections::HashMap;
use std::time::Duration;

use super::clock::{Clock, SystemClock};
use super::duration::format_duration;
use super::entry::CacheEntry;

/// A keyed store whose entries expire after a per-entry TTL.
///
/// Expired entries are never returned from [`get`](CacheService::get),
/// whether or not they have been purged yet.
pub trait CacheService<V> {
    /// Fetch a live entry.
    fn get(&mut self, key: &str) -> Option<V>;

    /// Store `value` under `key`, replacing any previous entry.
    fn set(&mut self, key: &str, value: V, ttl: Duration);

    /// Drop an entry. Returns whether one was present.
    fn remove(&mut self, key: &str) -> bool;

    /// Drop every entry. Returns how many were present.
    fn clear(&mut self) -> usize;

    /// Drop expired entries. Returns how many were removed.
    fn purge_expired(&mut self) -> usize;
}

/// [`CacheService`] over a `HashMap`, reading time from a [`Clock`].
#[derive(Debug)]
pub struct MemoryCache<V, C = SystemClock> {
    entries: HashMap<String, CacheEntry<V>>,
    clock: C,
}

impl<V> MemoryCache<V, SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<V> Default for MemoryCache<V, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: Clock> MemoryCache<V, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
        }
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look at an entry's metadata without cloning its value.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }
}

impl<V: Clone, C: Clock> CacheService<V> for MemoryCache<V, C> {
    fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now();
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                tracing::debug!(
                    "Cache hit: {} (age {}, expires in {})",
                    key,
                    format_duration(entry.age(now)),
                    format_duration(entry.remaining_ttl(now))
                );
                Some(entry.value.clone())
            }
            Some(_) => {
                tracing::debug!("Cache expired: {}", key);
                self.entries.remove(key);
                None
            }
            None => {
                tracing::debug!("Cache miss: {}", key);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: V, ttl: Duration) {
        let entry = CacheEntry::new(value, self.clock.now(), ttl);
        self.entries.insert(key.to_string(), entry);
    }

    fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!("Purged {} expired cache entries", removed);
        }
        removed
    }
}
