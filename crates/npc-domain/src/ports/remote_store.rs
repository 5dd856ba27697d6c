//! Remote Store Port
//!
//! Thin client abstraction over the shared, networked key-value tier. The
//! cache manager only issues requests through this trait and never owns the
//! connection; implementations decide how sessions are pooled and reused.
//!
//! ## Error contract
//!
//! Every transport-level failure must surface as
//! [`Error::BackendUnavailable`](crate::Error::BackendUnavailable) with a
//! [`BackendFailure`](crate::BackendFailure) classification. A missing key is
//! `Ok(None)`, never an error.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Remote Store Port
///
/// # Implementations
///
/// - **Redis**: shared store for multi-instance deployments
/// - **InMemory**: in-process stand-in for tests and single-node development
#[async_trait]
pub trait RemoteStore: Send + Sync + std::fmt::Debug {
    /// Fetch the raw bytes stored under `key`
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, expiring after `ttl`
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()>;

    /// Delete every key in `keys`, returning how many existed
    async fn delete(&self, keys: &[String]) -> Result<u64>;

    /// List keys matching a glob-style pattern (`*` or `prefix*`)
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<()>;

    /// Identifier of this implementation (e.g., "redis", "memory")
    fn provider_name(&self) -> &str;
}
