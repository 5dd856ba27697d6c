//! Two-tier cache manager
//!
//! Cache-aside orchestration over the [`LocalCache`] (tier 1) and an optional
//! [`RemoteStore`] (tier 2).
//!
//! | Operation | Tier 1 | Tier 2 failure |
//! |-----------|--------|----------------|
//! | `get` | read first, backfilled on remote hit | treated as a miss |
//! | `set` | always written | logged and counted, call succeeds |
//! | `delete` | always removed | returned to the caller |
//! | `get_or_set` | as `get`, then `set` | never surfaced |
//! | `invalidate_pattern` | always fully invalidated | aggregated into `PartialInvalidation` |
//!
//! Every remote call is bounded by the configured remote timeout and by the
//! manager's shutdown token. Dropping a returned future cancels the in-flight
//! remote call; tier 1 is only written once a remote response has arrived.

use super::codec;
use super::local::{LocalCache, LocalLookup};
use super::sweeper::ExpirySweeper;
use crate::config::CacheConfig;
use crate::constants::{INVALIDATION_BATCH_SIZE, SWEEPER_SHUTDOWN_TIMEOUT_SECS};
use crate::utils::TimedOperation;
use npc_domain::error::{Error, Result};
use npc_domain::ports::{MetricsRecorder, RemoteStore};
use npc_domain::value_objects::{BackendFailure, CacheKey, CacheTier, EvictionReason};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info, warn};

/// Outcome of a successful pattern invalidation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InvalidationSummary {
    /// Entries removed from the local tier
    pub local_removed: usize,
    /// Keys removed from the remote tier
    pub remote_removed: u64,
}

/// Point-in-time view of the manager
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Entries currently held locally
    pub local_entries: usize,
    /// Local entry bound
    pub local_capacity: usize,
    /// TTL applied to keys without one
    pub default_ttl_secs: u64,
    /// Largest accepted serialized value
    pub max_value_size: usize,
    /// Lookups answered by either tier
    pub hits: u64,
    /// Lookups answered by neither tier
    pub misses: u64,
    /// `hits / (hits + misses)`, 0 when nothing was looked up
    pub hit_ratio: f64,
    /// Name of the remote provider, if one is configured
    pub remote_provider: Option<String>,
    /// Whether the remote tier answered a ping
    pub remote_healthy: bool,
}

/// Two-tier cache manager
///
/// Share it as `Arc<CacheManager>`. Call [`CacheManager::shutdown`] to stop the
/// background sweep; dropping the manager also signals it to stop.
#[derive(Debug)]
pub struct CacheManager {
    local: Arc<LocalCache>,
    remote: Option<Arc<dyn RemoteStore>>,
    metrics: Arc<dyn MetricsRecorder>,
    sweeper: ExpirySweeper,
    default_ttl: Duration,
    max_value_size: usize,
    remote_timeout: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    shutdown: CancellationToken,
    tasks: TaskTracker,
}

impl CacheManager {
    /// Create a manager and start its background sweep
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(
        config: &CacheConfig,
        remote: Option<Arc<dyn RemoteStore>>,
        metrics: Arc<dyn MetricsRecorder>,
    ) -> Result<Self> {
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(Error::infrastructure(
                "CacheManager must be created inside a Tokio runtime",
            ));
        }

        let local = Arc::new(LocalCache::new(
            config.local_capacity,
            config.default_ttl(),
        ));
        let sweeper = ExpirySweeper::new(Arc::clone(&local), Arc::clone(&metrics));
        let shutdown = CancellationToken::new();
        let tasks = TaskTracker::new();

        sweeper
            .clone()
            .spawn(config.sweep_interval(), shutdown.child_token(), &tasks);

        info!(
            capacity = local.capacity(),
            remote = remote.as_ref().map(|r| r.provider_name()).unwrap_or("none"),
            "Cache manager started"
        );

        Ok(Self {
            local,
            remote,
            metrics,
            sweeper,
            default_ttl: config.default_ttl(),
            max_value_size: config.max_value_size,
            remote_timeout: config.remote_timeout(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            shutdown,
            tasks,
        })
    }

    /// Read and decode the value stored under `key`
    ///
    /// Returns [`Error::CacheMiss`] when neither tier has it. A remote failure
    /// counts as a miss; a value that cannot be decoded is an error.
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<T> {
        let bytes = self.get_raw(key).await?;
        codec::decode(&bytes)
    }

    /// Read the raw bytes stored under `key`
    pub async fn get_raw(&self, key: &CacheKey) -> Result<Vec<u8>> {
        let timer = TimedOperation::start(CacheTier::Combined, "get");
        let result = self.lookup(key, &key.full_key()).await;
        timer.finish(self.metrics.as_ref());
        result.map(|value| value.to_vec())
    }

    /// Encode and store `value` in both tiers
    ///
    /// Fails only on encoding errors or [`Error::ValueTooLarge`]; remote write
    /// failures are logged and counted.
    pub async fn set<T: Serialize + ?Sized>(&self, key: &CacheKey, value: &T) -> Result<()> {
        let bytes = codec::encode(value)?;
        self.set_raw(key, &bytes).await
    }

    /// Store raw bytes in both tiers without any encoding
    pub async fn set_raw(&self, key: &CacheKey, value: &[u8]) -> Result<()> {
        let timer = TimedOperation::start(CacheTier::Combined, "set");
        let result = self.store(key, &key.full_key(), value).await;
        timer.finish(self.metrics.as_ref());
        result
    }

    /// Remove `key` from both tiers
    ///
    /// The local entry is always removed first. A remote failure is returned
    /// because other processes may still read the stale value.
    pub async fn delete(&self, key: &CacheKey) -> Result<()> {
        let timer = TimedOperation::start(CacheTier::Combined, "delete");
        let full_key = key.full_key();

        self.local.delete(&full_key);
        self.publish_local_size();

        let result = match &self.remote {
            Some(remote) => self
                .remote_call("delete", remote.delete(std::slice::from_ref(&full_key)))
                .await
                .map(|_| ())
                .inspect_err(|e| {
                    error!(key = %full_key, error = %e, "Remote cache delete failed");
                }),
            None => Ok(()),
        };

        timer.finish(self.metrics.as_ref());
        result
    }

    /// Return the cached value, or produce, cache and return it
    ///
    /// `producer` runs at most once, and only on a miss. Its error is returned
    /// unchanged and nothing is cached. Failing to cache a produced value is
    /// logged; the value is still returned.
    pub async fn get_or_set<T, E, F, Fut>(
        &self,
        key: &CacheKey,
        producer: F,
    ) -> std::result::Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        let timer = TimedOperation::start(CacheTier::Combined, "get_or_set");
        let full_key = key.full_key();

        if let Ok(bytes) = self.lookup(key, &full_key).await {
            match codec::decode::<T>(&bytes) {
                Ok(value) => {
                    timer.finish(self.metrics.as_ref());
                    return Ok(value);
                }
                Err(e) => {
                    warn!(key = %full_key, error = %e, "Discarding undecodable cached value");
                    self.metrics.record_error(CacheTier::Local, e.error_type());
                    self.local.delete(&full_key);
                }
            }
        }

        let value = producer().await?;

        let stored = match codec::encode(&value) {
            Ok(bytes) => self.store(key, &full_key, &bytes).await,
            Err(e) => Err(e),
        };
        if let Err(e) = stored {
            warn!(key = %full_key, error = %e, "Produced value was not cached");
        }

        timer.finish(self.metrics.as_ref());
        Ok(value)
    }

    /// Remove every key matching `pattern` from both tiers
    ///
    /// The local tier is invalidated first and always completely. Remote keys
    /// are listed, then deleted in batches; a key written between the two
    /// steps may survive. Remote failures are collected into
    /// [`Error::PartialInvalidation`].
    pub async fn invalidate_pattern(&self, pattern: &str) -> Result<InvalidationSummary> {
        let timer = TimedOperation::start(CacheTier::Combined, "invalidate");
        let result = self.invalidate(pattern).await;
        timer.finish(self.metrics.as_ref());
        result
    }

    async fn invalidate(&self, pattern: &str) -> Result<InvalidationSummary> {
        let mut summary = InvalidationSummary {
            local_removed: self.local.invalidate_pattern(pattern),
            remote_removed: 0,
        };
        self.publish_local_size();

        let Some(remote) = &self.remote else {
            info!(pattern, local = summary.local_removed, "Invalidated cache pattern");
            return Ok(summary);
        };

        let keys = match self.remote_call("keys", remote.keys(pattern)).await {
            Ok(keys) => keys,
            Err(e) => {
                error!(pattern, error = %e, "Failed to list remote keys for invalidation");
                return Err(Error::PartialInvalidation {
                    pattern: pattern.to_string(),
                    removed: 0,
                    errors: vec![e.to_string()],
                });
            }
        };

        let mut errors = Vec::new();
        for batch in keys.chunks(INVALIDATION_BATCH_SIZE) {
            match self.remote_call("delete", remote.delete(batch)).await {
                Ok(removed) => summary.remote_removed += removed,
                Err(e) => errors.push(e.to_string()),
            }
        }

        if errors.is_empty() {
            info!(
                pattern,
                local = summary.local_removed,
                remote = summary.remote_removed,
                "Invalidated cache pattern"
            );
            Ok(summary)
        } else {
            error!(pattern, failures = errors.len(), "Remote invalidation incomplete");
            Err(Error::PartialInvalidation {
                pattern: pattern.to_string(),
                removed: summary.remote_removed,
                errors,
            })
        }
    }

    /// Remove expired local entries now, returning how many were removed
    pub fn sweep_expired(&self) -> usize {
        self.sweeper.sweep()
    }

    /// Check the remote tier within the remote timeout
    pub async fn remote_ping(&self) -> Result<()> {
        match &self.remote {
            Some(remote) => self.remote_call("ping", remote.ping()).await,
            None => Err(Error::backend_unavailable(
                BackendFailure::Connection,
                "No remote cache tier configured",
            )),
        }
    }

    /// Snapshot of sizes, counters and remote health
    pub async fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let lookups = hits + misses;
        let remote_healthy = self.remote.is_some() && self.remote_ping().await.is_ok();

        CacheStats {
            local_entries: self.local.len(),
            local_capacity: self.local.capacity(),
            default_ttl_secs: self.default_ttl.as_secs(),
            max_value_size: self.max_value_size,
            hits,
            misses,
            hit_ratio: if lookups == 0 {
                0.0
            } else {
                hits as f64 / lookups as f64
            },
            remote_provider: self
                .remote
                .as_ref()
                .map(|remote| remote.provider_name().to_string()),
            remote_healthy,
        }
    }

    /// Whether a remote tier is configured
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Number of entries in the local tier
    pub fn local_len(&self) -> usize {
        self.local.len()
    }

    /// Number of background tasks still running
    pub fn active_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Whether shutdown has been initiated
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Stop the background sweep and cancel in-flight remote calls
    ///
    /// Returns `true` when the sweep stopped in time. Calling it again is a
    /// no-op. Reads and writes keep working against the local tier afterwards,
    /// but every remote call fails with a cancellation: `set` no longer
    /// reaches the remote tier and `delete` returns
    /// [`Error::BackendUnavailable`] whenever a remote store is configured.
    pub async fn shutdown(&self) -> bool {
        if !self.shutdown.is_cancelled() {
            info!("Shutting down cache manager");
        }
        self.shutdown.cancel();
        self.tasks.close();

        let timeout = Duration::from_secs(SWEEPER_SHUTDOWN_TIMEOUT_SECS);
        if tokio::time::timeout(timeout, self.tasks.wait()).await.is_ok() {
            true
        } else {
            warn!("Cache sweeper did not stop within {:?}", timeout);
            false
        }
    }

    /// Local-then-remote lookup with backfill
    async fn lookup(&self, key: &CacheKey, full_key: &str) -> Result<Arc<[u8]>> {
        match self.local.get(full_key) {
            LocalLookup::Hit(value) => {
                self.metrics.record_hit(CacheTier::Local, &key.namespace);
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Ok(value);
            }
            LocalLookup::Expired => {
                self.metrics
                    .record_evictions(CacheTier::Local, EvictionReason::Expired, 1);
                self.metrics.record_miss(CacheTier::Local, &key.namespace);
                self.publish_local_size();
            }
            LocalLookup::Miss => self.metrics.record_miss(CacheTier::Local, &key.namespace),
        }

        if let Some(remote) = &self.remote {
            match self.remote_call("get", remote.get(full_key)).await {
                Ok(Some(bytes)) => {
                    self.metrics.record_hit(CacheTier::Remote, &key.namespace);
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    let value: Arc<[u8]> = Arc::from(bytes);
                    self.backfill(key, full_key, &value);
                    return Ok(value);
                }
                Ok(None) => self.metrics.record_miss(CacheTier::Remote, &key.namespace),
                Err(e) => {
                    debug!(key = full_key, error = %e, "Remote cache read degraded to miss");
                    self.metrics.record_miss(CacheTier::Remote, &key.namespace);
                }
            }
        }

        self.metrics.record_miss(CacheTier::Combined, &key.namespace);
        self.misses.fetch_add(1, Ordering::Relaxed);
        Err(Error::cache_miss(full_key))
    }

    /// Write-through store shared by `set_raw` and `get_or_set`
    async fn store(&self, key: &CacheKey, full_key: &str, value: &[u8]) -> Result<()> {
        if value.len() > self.max_value_size {
            self.metrics
                .record_error(CacheTier::Combined, "value_too_large");
            return Err(Error::value_too_large(value.len(), self.max_value_size));
        }

        let ttl = key.effective_ttl(self.default_ttl);
        self.write_local(full_key, Arc::from(value), ttl);

        if let Some(remote) = &self.remote {
            if let Err(e) = self
                .remote_call("set", remote.set(full_key, value, ttl))
                .await
            {
                warn!(key = full_key, error = %e, "Remote cache write failed, value cached locally only");
            }
        }
        Ok(())
    }

    fn backfill(&self, key: &CacheKey, full_key: &str, value: &Arc<[u8]>) {
        if value.len() > self.max_value_size {
            debug!(key = full_key, size = value.len(), "Skipping backfill of oversized remote value");
            return;
        }
        self.write_local(full_key, Arc::clone(value), key.effective_ttl(self.default_ttl));
    }

    fn write_local(&self, full_key: &str, value: Arc<[u8]>, ttl: Duration) {
        if let Some(evicted) = self.local.set(full_key, value, Some(ttl)) {
            debug!(key = %evicted, "Evicted least recently used cache entry");
            self.metrics
                .record_evictions(CacheTier::Local, EvictionReason::Capacity, 1);
        }
        self.publish_local_size();
    }

    fn publish_local_size(&self) {
        self.metrics
            .set_entry_count(CacheTier::Local, self.local.len());
    }

    /// Run a remote call under the remote timeout and the shutdown token
    async fn remote_call<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let timer = TimedOperation::start(CacheTier::Remote, operation);
        let outcome = tokio::select! {
            biased;
            () = self.shutdown.cancelled() => Err(Error::backend_unavailable(
                BackendFailure::Cancelled,
                format!("Remote {operation} cancelled by shutdown"),
            )),
            result = tokio::time::timeout(self.remote_timeout, call) => match result {
                Ok(result) => result,
                Err(_) => Err(Error::backend_unavailable(
                    BackendFailure::Timeout,
                    format!("Remote {operation} exceeded {:?}", self.remote_timeout),
                )),
            },
        };

        timer.finish(self.metrics.as_ref());
        if let Err(e) = &outcome {
            self.metrics.record_error(CacheTier::Remote, e.error_type());
        }
        outcome
    }
}

impl Drop for CacheManager {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
