//! Latency instrumentation for cache operations

use npc_domain::ports::MetricsRecorder;
use npc_domain::value_objects::CacheTier;
use std::time::{Duration, Instant};

/// Measures one cache operation and reports it as a latency sample
///
/// # Example
///
/// ```
/// use npc_domain::CacheTier;
/// use npc_infrastructure::utils::TimedOperation;
/// use npc_providers::metrics::NullMetricsRecorder;
///
/// let timer = TimedOperation::start(CacheTier::Combined, "get");
/// let elapsed = timer.finish(&NullMetricsRecorder);
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use = "a timer only reports when finished"]
pub struct TimedOperation {
    tier: CacheTier,
    operation: &'static str,
    start: Instant,
}

impl TimedOperation {
    /// Start timing `operation` against `tier`
    pub fn start(tier: CacheTier, operation: &'static str) -> Self {
        Self {
            tier,
            operation,
            start: Instant::now(),
        }
    }

    /// Time since the operation started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Record the elapsed time on `metrics` and return it
    pub fn finish(self, metrics: &dyn MetricsRecorder) -> Duration {
        let elapsed = self.elapsed();
        metrics.record_latency(self.tier, self.operation, elapsed);
        elapsed
    }
}
