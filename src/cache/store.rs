//! Post Cache Module
//!
//! Bounded post store combining HashMap storage with LRU tracking and TTL
//! expiration. Every entry shares the same TTL.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Post Cache ==
/// Bounded, time-expiring map from post id to post text.
///
/// Invariants:
/// - never holds more than `max_entries` entries,
/// - an entry is only ever returned while `now < expires_at`,
/// - inserting a new key into a full cache first drops expired entries, then
///   evicts exactly one least recently used entry if still full.
///
/// Expired entries are removed lazily when touched by `get`/`delete`/`put`
/// and eagerly by [`cleanup_expired`](Self::cleanup_expired). Every entry
/// shares one TTL, so write order is also expiry order: the `writes` tracker
/// yields the next entry to expire in O(log n) without scanning the map.
#[derive(Debug)]
pub struct PostCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Write order, oldest first (= soonest to expire)
    writes: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Lifetime of every entry
    ttl: Duration,
}

impl PostCache {
    // == Constructor ==
    /// Creates a new cache holding at most `max_entries` posts for `ttl` each.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            writes: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl,
        }
    }

    // == Put ==
    /// Inserts or overwrites `key`, resetting its expiry to `now + ttl` and
    /// making it the most recently used entry.
    pub fn put(&mut self, key: String, value: String) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            self.cleanup_expired();

            if self.entries.len() >= self.max_entries {
                if let Some(evicted) = self.lru.evict_oldest() {
                    self.entries.remove(&evicted);
                    self.stats.record_eviction();
                    debug!(key = %evicted, "Evicted least recently used post");
                }
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, self.ttl));
        self.lru.touch(&key);
        self.writes.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value for `key` if it is present and live.
    ///
    /// A hit refreshes the key's recency. An expired entry is removed and
    /// reported as absent.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let value = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) if entry.is_expired() => None,
            Some(entry) => Some(entry.value.clone()),
        };

        match value {
            Some(value) => {
                self.stats.record_hit();
                self.lru.touch(key);
                Some(value)
            }
            None => {
                self.remove_entry(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes `key`, returning whether a live entry was removed.
    ///
    /// Counts as a lookup: a removed live entry is a hit, anything else a
    /// miss. An expired entry is still physically dropped, but reported as
    /// not removed since it was already absent from the caller's point of view.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.remove_entry(key) {
            Some(entry) if entry.is_expired() => {
                self.stats.record_expirations(1);
                self.stats.record_miss();
                false
            }
            Some(_) => {
                self.stats.record_hit();
                true
            }
            None => {
                self.stats.record_miss();
                false
            }
        }
    }

    // == Values ==
    /// Returns every live value, least recently used first.
    ///
    /// Listing does not count as an access and leaves recency untouched.
    pub fn values(&self) -> Vec<String> {
        let now = Instant::now();
        self.lru
            .iter()
            .filter_map(|key| self.entries.get(key))
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.value.clone())
            .collect()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Walks the write order from the oldest write and stops at the first
    /// live entry, so the cost is proportional to the number of expired
    /// entries. Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let mut count = 0;

        while let Some(key) = self.writes.peek_oldest() {
            let expired = self
                .entries
                .get(key)
                .map_or(true, |entry| entry.is_expired_at(now));
            if !expired {
                break;
            }
            let key = key.clone();
            self.remove_entry(&key);
            count += 1;
        }

        self.stats.record_expirations(count);
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of physically stored entries, expired ones included until swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn remove_entry(&mut self, key: &str) -> Option<CacheEntry> {
        self.writes.remove(key);
        let entry = self.entries.remove(key)?;
        self.lru.remove(key);
        self.stats.set_total_entries(self.entries.len());
        Some(entry)
    }
}
