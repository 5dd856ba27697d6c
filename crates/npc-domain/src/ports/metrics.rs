//! Metrics Recorder Port
//!
//! Every cache operation reports through this trait. Implementations must be
//! safe for concurrent use, must never lose an increment, and must not block:
//! they are called on the request path.

use crate::value_objects::{CacheTier, EvictionReason};
use std::time::Duration;

/// Metrics Recorder Port
pub trait MetricsRecorder: Send + Sync + std::fmt::Debug {
    /// Count a hit in `tier` for `namespace`
    fn record_hit(&self, tier: CacheTier, namespace: &str);

    /// Count a miss in `tier` for `namespace`
    fn record_miss(&self, tier: CacheTier, namespace: &str);

    /// Count a failure in `tier`, labelled by error type
    fn record_error(&self, tier: CacheTier, error_type: &str);

    /// Observe the duration of `operation` against `tier`
    fn record_latency(&self, tier: CacheTier, operation: &str, elapsed: Duration);

    /// Publish the current entry count of `tier`
    fn set_entry_count(&self, tier: CacheTier, count: usize);

    /// Count `count` evictions from `tier` for `reason`
    fn record_evictions(&self, tier: CacheTier, reason: EvictionReason, count: u64);
}
