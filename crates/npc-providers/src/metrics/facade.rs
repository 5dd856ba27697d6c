//! Metrics facade recorder
//!
//! Forwards cache observations to the global `metrics` recorder. Without an
//! installed exporter the macros are no-ops, so this is always safe to use.

use crate::constants::{
    METRIC_CACHE_DURATION, METRIC_CACHE_ENTRIES, METRIC_CACHE_ERRORS, METRIC_CACHE_EVICTIONS,
    METRIC_CACHE_HITS, METRIC_CACHE_MISSES,
};
use metrics::{
    Unit, counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram,
};
use npc_domain::ports::MetricsRecorder;
use npc_domain::value_objects::{CacheTier, EvictionReason};
use std::time::Duration;
use tracing::trace;

/// Metrics recorder backed by the `metrics` crate macros
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeMetricsRecorder;

impl FacadeMetricsRecorder {
    /// Create a new facade recorder
    pub fn new() -> Self {
        Self
    }

    /// Register help text and units for every cache metric
    ///
    /// Call once after installing an exporter.
    pub fn register_descriptions() {
        describe_counter!(METRIC_CACHE_HITS, "Cache hits by tier and namespace");
        describe_counter!(METRIC_CACHE_MISSES, "Cache misses by tier and namespace");
        describe_counter!(METRIC_CACHE_ERRORS, "Cache failures by tier and error type");
        describe_histogram!(
            METRIC_CACHE_DURATION,
            Unit::Seconds,
            "Cache operation latency by tier and operation"
        );
        describe_gauge!(METRIC_CACHE_ENTRIES, "Current number of cached entries by tier");
        describe_counter!(METRIC_CACHE_EVICTIONS, "Evicted entries by tier and reason");
    }
}

impl MetricsRecorder for FacadeMetricsRecorder {
    fn record_hit(&self, tier: CacheTier, namespace: &str) {
        counter!(METRIC_CACHE_HITS, "tier" => tier.as_str(), "namespace" => namespace.to_string())
            .increment(1);
    }

    fn record_miss(&self, tier: CacheTier, namespace: &str) {
        counter!(METRIC_CACHE_MISSES, "tier" => tier.as_str(), "namespace" => namespace.to_string())
            .increment(1);
    }

    fn record_error(&self, tier: CacheTier, error_type: &str) {
        counter!(METRIC_CACHE_ERRORS, "tier" => tier.as_str(), "error_type" => error_type.to_string())
            .increment(1);
        trace!("Recorded cache error: tier={} type={}", tier, error_type);
    }

    fn record_latency(&self, tier: CacheTier, operation: &str, elapsed: Duration) {
        histogram!(METRIC_CACHE_DURATION, "tier" => tier.as_str(), "operation" => operation.to_string())
            .record(elapsed.as_secs_f64());
    }

    fn set_entry_count(&self, tier: CacheTier, count: usize) {
        gauge!(METRIC_CACHE_ENTRIES, "tier" => tier.as_str()).set(count as f64);
    }

    fn record_evictions(&self, tier: CacheTier, reason: EvictionReason, count: u64) {
        if count == 0 {
            return;
        }
        counter!(METRIC_CACHE_EVICTIONS, "tier" => tier.as_str(), "reason" => reason.as_str())
            .increment(count);
    }
}
