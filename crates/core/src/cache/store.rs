//! In-memory TTL cache with lazy expiry.
//!
//! Entries are never swept in the background. An expired entry is removed the
//! next time it is looked at through [`CacheStore::get`] or
//! [`CacheStore::time_remaining`], so a stale payload is never handed out.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Default time-to-live for cached responses (10 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// A single cached payload.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub key: String,
    pub payload: T,
    pub stored_at: Instant,
}

impl<T> CacheEntry<T> {
    fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.stored_at)
    }

    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}

/// TTL-bounded key/value store.
///
/// Capacity is unbounded; there is no LRU eviction. All operations take the
/// internal lock for their whole duration, which keeps the check-then-delete of
/// lazy eviction atomic when the store is shared across threads.
#[derive(Debug)]
pub struct CacheStore<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
    ttl: Duration,
}

impl<T> Default for CacheStore<T> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<T> CacheStore<T> {
    /// Create an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self { entries: Mutex::new(HashMap::new()), ttl }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Insert or overwrite the entry for `key`, stamped with the current time.
    pub fn set(&self, key: impl Into<String>, payload: T) {
        let key = key.into();
        let entry = CacheEntry { key: key.clone(), payload, stored_at: Instant::now() };
        self.entries.lock().insert(key, entry);
    }

    /// Delete the entry for `key`. No-op if absent.
    pub fn remove(&self, key: &str) {
        if self.entries.lock().remove(key).is_some() {
            tracing::debug!(key, "cache entry removed");
        }
    }

    /// Drop every entry, returning how many were held.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.lock();
        let dropped = entries.len();
        entries.clear();
        tracing::debug!(dropped, "cache cleared");
        dropped
    }

    /// Time left before the entry for `key` goes stale.
    ///
    /// Returns `None` when there is no entry or when it has no time left, in
    /// which case the entry is evicted.
    pub fn remaining(&self, key: &str) -> Option<Duration> {
        let mut entries = self.entries.lock();
        let entry = entries.get(key)?;
        let remaining = self.ttl.saturating_sub(entry.age(Instant::now()));

        if remaining.is_zero() {
            entries.remove(key);
            tracing::debug!(key, "evicted expired cache entry");
            return None;
        }

        Some(remaining)
    }

    /// Whole seconds left before the entry for `key` expires, rounded up.
    ///
    /// Returns 0 if the entry is absent or expired.
    pub fn time_remaining(&self, key: &str) -> u64 {
        self.remaining(key)
            .map(|remaining| u64::try_from(remaining.as_nanos().div_ceil(1_000_000_000)).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }

    /// Whether a live entry exists for `key`.
    pub fn is_live(&self, key: &str) -> bool {
        self.time_remaining(key) > 0
    }

    /// Number of entries currently held, including ones not yet found stale.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<T: Clone> CacheStore<T> {
    /// Get the payload for `key` if it is still fresh.
    ///
    /// An expired entry is deleted and `None` is returned.
    pub fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock();
        let expired = entries.get(key)?.is_expired(Instant::now(), self.ttl);

        if expired {
            entries.remove(key);
            tracing::debug!(key, "evicted expired cache entry");
            return None;
        }

        entries.get(key).map(|entry| entry.payload.clone())
    }
}
