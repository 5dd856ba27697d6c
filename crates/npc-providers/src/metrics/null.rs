//! No-op metrics recorder

use npc_domain::ports::MetricsRecorder;
use npc_domain::value_objects::{CacheTier, EvictionReason};
use std::time::Duration;

/// Metrics recorder that drops every observation
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMetricsRecorder;

impl NullMetricsRecorder {
    /// Create a new null recorder
    pub fn new() -> Self {
        Self
    }
}

impl MetricsRecorder for NullMetricsRecorder {
    fn record_hit(&self, _tier: CacheTier, _namespace: &str) {}

    fn record_miss(&self, _tier: CacheTier, _namespace: &str) {}

    fn record_error(&self, _tier: CacheTier, _error_type: &str) {}

    fn record_latency(&self, _tier: CacheTier, _operation: &str, _elapsed: Duration) {}

    fn set_entry_count(&self, _tier: CacheTier, _count: usize) {}

    fn record_evictions(&self, _tier: CacheTier, _reason: EvictionReason, _count: u64) {}
}
