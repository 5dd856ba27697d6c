//! Background expiry sweep
//!
//! One task per manager, tracked by the manager's `TaskTracker` and stopped
//! through its `CancellationToken`.

use super::local::LocalCache;
use npc_domain::ports::MetricsRecorder;
use npc_domain::value_objects::{CacheTier, EvictionReason};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info};

/// Removes expired local entries and publishes the local size gauge
#[derive(Debug, Clone)]
pub(crate) struct ExpirySweeper {
    local: Arc<LocalCache>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl ExpirySweeper {
    pub(crate) fn new(local: Arc<LocalCache>, metrics: Arc<dyn MetricsRecorder>) -> Self {
        Self { local, metrics }
    }

    /// Run one sweep, returning how many entries were removed
    pub(crate) fn sweep(&self) -> usize {
        let removed = self.local.remove_expired();
        self.metrics.record_evictions(
            CacheTier::Local,
            EvictionReason::Expired,
            removed as u64,
        );
        self.metrics
            .set_entry_count(CacheTier::Local, self.local.len());
        removed
    }

    /// Spawn the periodic sweep on `tracker`; it exits when `token` is cancelled
    pub(crate) fn spawn(self, interval: Duration, token: CancellationToken, tracker: &TaskTracker) {
        tracker.spawn(self.run(interval, token));
    }

    async fn run(self, interval: Duration, token: CancellationToken) {
        // First sweep one full interval after start
        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!("Cache sweeper started with interval {:?}", interval);

        loop {
            tokio::select! {
                biased;
                () = token.cancelled() => break,
                _ = ticker.tick() => {
                    let removed = self.sweep();
                    if removed > 0 {
                        debug!(removed, remaining = self.local.len(), "Swept expired cache entries");
                    }
                }
            }
        }

        info!("Cache sweeper stopped");
    }
}
