//! Local cache tier
//!
//! Bounded, TTL-aware, LRU-evicting in-process store. Every operation takes a
//! single exclusive lock: `get` must update access metadata atomically, and all
//! hot-path critical sections are O(log n). Pattern invalidation and expiry
//! sweeps walk every entry and are meant for infrequent administrative use.
//!
//! Recency is an ordered index keyed by a monotonically increasing access
//! tick, so the least recently used entry is always the first in the index and
//! ties in wall-clock access time resolve by access order.

use npc_domain::constants::MAX_CACHE_TTL_SECS;
use npc_domain::value_objects::matches_pattern;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// Outcome of a local lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalLookup {
    /// Live entry; the value is shared, not copied
    Hit(Arc<[u8]>),
    /// No entry under the key
    Miss,
    /// The entry had expired and was removed by this lookup
    Expired,
}

/// Read-only view of an entry's metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInfo {
    /// Stored value size in bytes
    pub size: usize,
    /// Number of successful lookups
    pub hit_count: u64,
    /// When the entry was written
    pub created_at: Instant,
    /// Last successful lookup, or the write time
    pub last_accessed_at: Instant,
    /// When the entry stops being served
    pub expires_at: Instant,
}

impl EntryInfo {
    /// Whether the entry is past its expiry at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug)]
struct CacheEntry {
    value: Arc<[u8]>,
    expires_at: Instant,
    hit_count: u64,
    created_at: Instant,
    last_accessed_at: Instant,
    access_tick: u64,
}

impl CacheEntry {
    fn info(&self) -> EntryInfo {
        EntryInfo {
            size: self.value.len(),
            hit_count: self.hit_count,
            created_at: self.created_at,
            last_accessed_at: self.last_accessed_at,
            expires_at: self.expires_at,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    /// access tick -> key; first entry is the least recently used
    recency: BTreeMap<u64, String>,
    tick: u64,
}

impl Inner {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn remove(&mut self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.recency.remove(&entry.access_tick);
        Some(entry)
    }
}

fn max_ttl() -> Duration {
    Duration::from_secs(MAX_CACHE_TTL_SECS)
}

/// Local cache tier
#[derive(Debug)]
pub struct LocalCache {
    inner: Mutex<Inner>,
    capacity: usize,
    default_ttl: Duration,
}

impl LocalCache {
    /// Create a cache holding at most `capacity` entries (minimum 1)
    ///
    /// `default_ttl` applies to writes that carry no TTL of their own. TTLs
    /// are clamped to [`MAX_CACHE_TTL_SECS`].
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            capacity: capacity.max(1),
            default_ttl: default_ttl.min(max_ttl()),
        }
    }

    // Poisoned locks are recovered
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up `key`, refreshing its access time on a hit
    ///
    /// An expired entry is removed on the spot and reported as
    /// [`LocalLookup::Expired`].
    pub fn get(&self, key: &str) -> LocalLookup {
        let now = Instant::now();
        let mut guard = self.lock();
        let inner = &mut *guard;

        let Some(entry) = inner.entries.get(key) else {
            return LocalLookup::Miss;
        };
        if now >= entry.expires_at {
            inner.remove(key);
            return LocalLookup::Expired;
        }

        let old_tick = entry.access_tick;
        let tick = inner.next_tick();
        inner.recency.remove(&old_tick);
        inner.recency.insert(tick, key.to_string());

        match inner.entries.get_mut(key) {
            Some(entry) => {
                entry.access_tick = tick;
                entry.last_accessed_at = now;
                entry.hit_count += 1;
                LocalLookup::Hit(Arc::clone(&entry.value))
            }
            None => LocalLookup::Miss,
        }
    }

    /// Store `value` under `key`, replacing any existing entry
    ///
    /// A `None` or zero `ttl` uses the default. When the cache is full and
    /// `key` is new, the least recently used entry is evicted first and its
    /// key is returned.
    pub fn set(&self, key: &str, value: Arc<[u8]>, ttl: Option<Duration>) -> Option<String> {
        let ttl = ttl
            .filter(|ttl| !ttl.is_zero())
            .unwrap_or(self.default_ttl)
            .min(max_ttl());
        let now = Instant::now();
        let expires_at = now.checked_add(ttl).unwrap_or(now);
        let mut guard = self.lock();
        let inner = &mut *guard;

        let mut evicted = None;
        if inner.remove(key).is_none() && inner.entries.len() >= self.capacity {
            if let Some((_, victim)) = inner.recency.pop_first() {
                inner.entries.remove(&victim);
                evicted = Some(victim);
            }
        }

        let tick = inner.next_tick();
        inner.recency.insert(tick, key.to_string());
        inner.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at,
                hit_count: 0,
                created_at: now,
                last_accessed_at: now,
                access_tick: tick,
            },
        );

        evicted
    }

    /// Remove `key`; returns whether an entry existed
    pub fn delete(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Remove every entry whose key matches `pattern`, returning the count
    ///
    /// `*` clears the cache, `prefix*` matches by prefix, anything else is an
    /// exact key.
    pub fn invalidate_pattern(&self, pattern: &str) -> usize {
        let mut guard = self.lock();
        let inner = &mut *guard;

        let doomed: Vec<String> = inner
            .entries
            .keys()
            .filter(|key| matches_pattern(key, pattern))
            .cloned()
            .collect();
        for key in &doomed {
            inner.remove(key);
        }
        doomed.len()
    }

    /// Remove every expired entry, returning the count
    pub fn remove_expired(&self) -> usize {
        let now = Instant::now();
        let mut guard = self.lock();
        let inner = &mut *guard;

        let expired: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| now >= entry.expires_at)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            inner.remove(key);
        }
        expired.len()
    }

    /// Metadata for `key` without touching its access state or expiring it
    pub fn peek(&self, key: &str) -> Option<EntryInfo> {
        self.lock().entries.get(key).map(CacheEntry::info)
    }

    /// Keys from least to most recently used
    pub fn keys(&self) -> Vec<String> {
        self.lock().recency.values().cloned().collect()
    }

    /// Number of entries, expired ones included until they are swept
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// TTL applied when a write carries none
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
