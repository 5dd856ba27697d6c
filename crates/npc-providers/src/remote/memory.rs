//! In-memory remote store
//!
//! Moka-backed stand-in for Redis, used by tests and single-process
//! development setups.
//!
//! ## Features
//!
//! - Per-entry TTL through a moka [`Expiry`] policy
//! - Fault injection: mark the store unavailable or add artificial latency
//!
//! ## Example
//!
//! ```ignore
//! use npc_providers::remote::InMemoryRemoteStore;
//! use std::time::Duration;
//!
//! let store = InMemoryRemoteStore::new();
//! store.set_latency(Duration::from_millis(50));
//! store.set_available(false);
//! ```

use crate::constants::MEMORY_STORE_DEFAULT_CAPACITY;
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use npc_domain::error::{Error, Result};
use npc_domain::ports::RemoteStore;
use npc_domain::value_objects::{BackendFailure, matches_pattern};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct StoredValue {
    bytes: Arc<[u8]>,
    ttl: Option<Duration>,
}

/// Expires each entry after the TTL it was written with
struct PerEntryTtl;

impl Expiry<String, StoredValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// In-memory remote store
///
/// Cloning shares the underlying entries and fault switches.
#[derive(Clone)]
pub struct InMemoryRemoteStore {
    cache: Cache<String, StoredValue>,
    available: Arc<AtomicBool>,
    latency_ms: Arc<AtomicU64>,
    capacity: u64,
}

impl Default for InMemoryRemoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRemoteStore {
    /// Create a new store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_STORE_DEFAULT_CAPACITY)
    }

    /// Create a new store holding at most `capacity` entries
    pub fn with_capacity(capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self {
            cache,
            available: Arc::new(AtomicBool::new(true)),
            latency_ms: Arc::new(AtomicU64::new(0)),
            capacity,
        }
    }

    /// Toggle availability; while unavailable every call fails with a connection error
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Delay every call by `latency`
    pub fn set_latency(&self, latency: Duration) {
        let millis = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self.latency_ms.store(millis, Ordering::SeqCst);
    }

    /// Number of live entries
    pub async fn len(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    /// Whether the store holds no live entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn simulate(&self) -> Result<()> {
        let millis = self.latency_ms.load(Ordering::SeqCst);
        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }

        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(Error::backend_unavailable(
                BackendFailure::Connection,
                "In-memory remote store marked unavailable",
            ))
        }
    }
}

#[async_trait]
impl RemoteStore for InMemoryRemoteStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.simulate().await?;
        Ok(self.cache.get(key).await.map(|v| v.bytes.to_vec()))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        self.simulate().await?;

        let stored = StoredValue {
            bytes: Arc::from(value),
            ttl: (!ttl.is_zero()).then_some(ttl),
        };
        self.cache.insert(key.to_string(), stored).await;
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<u64> {
        self.simulate().await?;

        let mut removed = 0;
        for key in keys {
            if self.cache.remove(key).await.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.simulate().await?;

        let mut keys: Vec<String> = self
            .cache
            .iter()
            .filter(|(key, _)| matches_pattern(key, pattern))
            .map(|(key, _)| key.to_string())
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn ping(&self) -> Result<()> {
        self.simulate().await
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for InMemoryRemoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRemoteStore")
            .field("capacity", &self.capacity)
            .field("entries", &self.cache.entry_count())
            .field("available", &self.available.load(Ordering::SeqCst))
            .finish()
    }
}
