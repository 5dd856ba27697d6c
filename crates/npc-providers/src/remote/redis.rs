//! Redis remote store
//!
//! Shared remote tier backed by Redis, suitable for multi-instance deployments.
//!
//! ## Features
//!
//! - Millisecond TTLs via `SET .. PX`
//! - Bulk deletion with a single `DEL`
//! - Incremental key listing with `SCAN MATCH` (never a blocking `KEYS`)
//! - Automatic reconnection through a lazily created `ConnectionManager`
//!
//! ## Example
//!
//! ```ignore
//! use npc_providers::remote::RedisRemoteStore;
//!
//! let store = RedisRemoteStore::new("redis://:secret@cache.internal:6379/0")?;
//! // Or with host/port
//! let store = RedisRemoteStore::with_host_port("localhost", 6379)?;
//! ```

use crate::constants::REDIS_SCAN_COUNT;
use async_trait::async_trait;
use npc_domain::error::{Error, Result};
use npc_domain::ports::RemoteStore;
use npc_domain::constants::CACHE_PATTERN_WILDCARD;
use npc_domain::value_objects::{BackendFailure, matches_pattern};
use redis::aio::ConnectionManager;
use redis::{Client, RedisError};
use std::collections::BTreeSet;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Redis remote store
///
/// The underlying connection is opened on first use and then shared by every
/// call; `ConnectionManager` multiplexes requests and reconnects on failure.
pub struct RedisRemoteStore {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    endpoint: String,
}

impl RedisRemoteStore {
    /// Create a new Redis remote store from a connection URL
    ///
    /// No network I/O happens here; the first command opens the connection.
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::configuration_with_source(format!("Invalid Redis URL: {e}"), e)
        })?;

        Ok(Self {
            client,
            connection: OnceCell::new(),
            endpoint: redact_credentials(connection_string),
        })
    }

    /// Create a new Redis remote store with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    /// Endpoint with any credentials removed, for logs and diagnostics
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the shared connection, opening it on first use
    async fn connection(&self) -> Result<ConnectionManager> {
        self.connection
            .get_or_try_init(|| async {
                self.client
                    .get_connection_manager()
                    .await
                    .map_err(|e| classify("Failed to connect to Redis", e))
            })
            .await
            .cloned()
    }
}

/// Map a Redis error onto the remote-tier failure classification
pub(crate) fn classify(context: &str, err: RedisError) -> Error {
    let kind = if err.is_timeout() {
        BackendFailure::Timeout
    } else if err.is_connection_refusal() || err.is_connection_dropped() || err.is_io_error() {
        BackendFailure::Connection
    } else {
        BackendFailure::Command
    };
    Error::backend_unavailable_with_source(kind, format!("{context}: {err}"), err)
}

/// Strip `user:password@` from a Redis URL
fn redact_credentials(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://{}", &url[..scheme_end], &url[at + 1..])
        }
        _ => url.to_string(),
    }
}

/// Convert a TTL to whole milliseconds, never rounding a non-zero TTL down to 0
/// Translate an invalidation pattern into a Redis `MATCH` glob
///
/// Only a lone `*` or a single trailing `*` stays a wildcard; every other glob
/// metacharacter is escaped so it matches literally.
fn scan_glob(pattern: &str) -> String {
    if pattern.len() == 1 && pattern.starts_with(CACHE_PATTERN_WILDCARD) {
        return pattern.to_string();
    }
    match pattern.strip_suffix(CACHE_PATTERN_WILDCARD) {
        Some(prefix) => {
            let mut glob = escape_glob(prefix);
            glob.push(CACHE_PATTERN_WILDCARD);
            glob
        }
        None => escape_glob(pattern),
    }
}

fn escape_glob(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    for c in literal.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[async_trait]
impl RemoteStore for RedisRemoteStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;

        redis::cmd("GET")
            .arg(key)
            .query_async::<Option<Vec<u8>>>(&mut conn)
            .await
            .map_err(|e| classify("Redis GET failed", e))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        let mut conn = self.connection().await?;

        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if !ttl.is_zero() {
            cmd.arg("PX").arg(ttl_millis(ttl));
        }

        cmd.query_async::<()>(&mut conn)
            .await
            .map_err(|e| classify("Redis SET failed", e))
    }

    async fn delete(&self, keys: &[String]) -> Result<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.connection().await?;

        redis::cmd("DEL")
            .arg(keys)
            .query_async::<u64>(&mut conn)
            .await
            .map_err(|e| classify("Redis DEL failed", e))
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.connection().await?;
        let glob = scan_glob(pattern);

        // SCAN may report a key more than once across steps
        let mut found = BTreeSet::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&glob)
                .arg("COUNT")
                .arg(REDIS_SCAN_COUNT)
                .query_async(&mut conn)
                .await
                .map_err(|e| classify("Redis SCAN failed", e))?;

            found.extend(batch.into_iter().filter(|key| matches_pattern(key, pattern)));
            if next == 0 {
                break;
            }
            cursor = next;
        }

        Ok(found.into_iter().collect())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;

        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| classify("Redis PING failed", e))
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisRemoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisRemoteStore")
            .field("endpoint", &self.endpoint)
            .field("connected", &self.connection.initialized())
            .finish()
    }
}
