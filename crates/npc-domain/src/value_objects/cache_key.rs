//! Structured cache keys
//!
//! A [`CacheKey`] names one cached value by namespace, key and optional version,
//! and may carry its own TTL. Both tiers only ever see the fully-qualified
//! string produced by [`build_key`].
//!
//! ## Example
//!
//! ```
//! use npc_domain::CacheKey;
//! use std::time::Duration;
//!
//! let key = CacheKey::new("foods", "apple")
//!     .with_version("2")
//!     .with_ttl(Duration::from_secs(600));
//! assert_eq!(key.full_key(), "foods:apple:v2");
//! ```

use crate::constants::{
    CACHE_KEY_DELIMITER, CACHE_KEY_VERSION_PREFIX, CACHE_PATTERN_WILDCARD, MAX_CACHE_TTL_SECS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Build a fully-qualified key: `namespace:key` or `namespace:key:vVERSION`
///
/// Neither `namespace` nor `key` should contain `:` in a way that makes the
/// result ambiguous; this is a caller precondition and is not checked.
pub fn build_key(namespace: &str, key: &str, version: Option<&str>) -> String {
    match version.filter(|v| !v.is_empty()) {
        Some(version) => format!(
            "{namespace}{CACHE_KEY_DELIMITER}{key}{CACHE_KEY_DELIMITER}{CACHE_KEY_VERSION_PREFIX}{version}"
        ),
        None => format!("{namespace}{CACHE_KEY_DELIMITER}{key}"),
    }
}

/// Pattern matching every key of a namespace (`namespace:*`)
pub fn namespace_pattern(namespace: &str) -> String {
    format!("{namespace}{CACHE_KEY_DELIMITER}{CACHE_PATTERN_WILDCARD}")
}

/// Structured cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    /// Logical grouping, e.g. `foods` or `workouts`
    pub namespace: String,
    /// Identifier within the namespace
    pub key: String,
    /// Optional schema/content version
    pub version: Option<String>,
    /// Entry TTL; `None` or zero means the configured default
    pub ttl: Option<Duration>,
}

impl CacheKey {
    /// Create a key with no version and the default TTL
    pub fn new<N: Into<String>, K: Into<String>>(namespace: N, key: K) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
            version: None,
            ttl: None,
        }
    }

    /// Set the version segment
    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the TTL for this key
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set the TTL in seconds
    pub fn with_ttl_secs(self, secs: u64) -> Self {
        self.with_ttl(Duration::from_secs(secs))
    }

    /// Fully-qualified key string used by both tiers
    pub fn full_key(&self) -> String {
        build_key(&self.namespace, &self.key, self.version.as_deref())
    }

    /// The key's own TTL when set and non-zero, otherwise `default`
    ///
    /// The result never exceeds [`MAX_CACHE_TTL_SECS`].
    pub fn effective_ttl(&self, default: Duration) -> Duration {
        self.ttl
            .filter(|ttl| !ttl.is_zero())
            .unwrap_or(default)
            .min(Duration::from_secs(MAX_CACHE_TTL_SECS))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_key())
    }
}
