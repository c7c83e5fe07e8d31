// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic TTL cache used by all data-fetching paths.
//!
//! Entries expire a fixed duration after they were stored and are evicted
//! lazily on read — there is no background sweeper. Entries inserted with
//! `ttl = None` (Qibla directions) never expire by time and are only
//! removed by [`TtlCache::invalidate`] or [`TtlCache::clear`].
//!
//! The map is guarded by a `Mutex`; a concurrent get-check-then-set across
//! two callers may trigger a redundant upstream fetch, never corrupted
//! state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use minaret_core::Clock;
use tracing::debug;

/// Default entry lifetime: one day of prayer times stays fresh for a day.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    stored_at: DateTime<Utc>,
    /// `None` means the entry never expires by time.
    ttl: Option<Duration>,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.ttl {
            None => false,
            Some(ttl) => match chrono::Duration::from_std(ttl) {
                Ok(ttl) => now.signed_duration_since(self.stored_at) >= ttl,
                // A TTL too large for chrono arithmetic can never elapse.
                Err(_) => false,
            },
        }
    }
}

/// Counts and keys currently held, expired-but-unread entries included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub count: usize,
    pub keys: Vec<String>,
}

/// String-keyed value store with per-entry expiry.
///
/// Keys are deterministic composite strings built by the caller from every
/// parameter that affects the value, so logically different requests never
/// alias the same entry.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, Entry<V>>>,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    /// Creates a cache with the given default entry lifetime.
    pub fn new(default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
            clock,
        }
    }

    /// Creates a cache with the 24-hour default lifetime.
    pub fn with_default_ttl(clock: Arc<dyn Clock>) -> Self {
        Self::new(DEFAULT_TTL, clock)
    }

    /// Returns the cached value for `key`, or `None`.
    ///
    /// Reading an expired entry removes it before returning `None`.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(key);
                debug!(key, "cache entry expired, evicted");
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Stores `value` under `key` with the default lifetime, replacing any
    /// previous entry.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, Some(self.default_ttl));
    }

    /// Stores `value` with an explicit lifetime; `None` means the entry
    /// never expires by time.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let entry = Entry {
            value,
            stored_at: self.clock.now(),
            ttl,
        };
        self.lock().insert(key.into(), entry);
    }

    /// Removes one entry. Returns whether it existed.
    pub fn invalidate(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Removes every entry, timeless ones included.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Snapshot of current occupancy. Expired-but-unread entries still
    /// count; only a read evicts them.
    pub fn stats(&self) -> CacheStats {
        let entries = self.lock();
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            count: entries.len(),
            keys,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry<V>>> {
        // Recover the map from a poisoned lock; entries are plain values
        // and remain structurally valid.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
