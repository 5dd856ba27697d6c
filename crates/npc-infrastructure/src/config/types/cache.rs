//! Cache configuration types

use crate::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_LOCAL_CAPACITY,
    DEFAULT_MAX_VALUE_SIZE, DEFAULT_REMOTE_TIMEOUT_MS, DEFAULT_SWEEP_INTERVAL_SECS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Redis URL for the remote tier, credentials included; `None` runs local-only
    pub redis_url: Option<String>,

    /// TTL applied when a key carries none (seconds)
    pub default_ttl_secs: u64,

    /// Maximum number of entries held by the local tier
    pub local_capacity: usize,

    /// Maximum serialized value size (bytes)
    pub max_value_size: usize,

    /// Emit cache metrics through the `metrics` facade
    pub metrics_enabled: bool,

    /// Deadline for every remote call (milliseconds)
    pub remote_timeout_ms: u64,

    /// Deadline for the initial remote ping (milliseconds)
    pub connect_timeout_ms: u64,

    /// Interval between background expiry sweeps (seconds)
    pub sweep_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            default_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            local_capacity: DEFAULT_LOCAL_CAPACITY,
            max_value_size: DEFAULT_MAX_VALUE_SIZE,
            metrics_enabled: true,
            remote_timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

impl CacheConfig {
    /// Default TTL as a Duration
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }

    /// Remote call deadline as a Duration
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }

    /// Initial ping deadline as a Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Sweep interval as a Duration
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}
