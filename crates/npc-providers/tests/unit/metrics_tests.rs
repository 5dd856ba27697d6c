//! Tests for the metrics recorders

use npc_domain::{CacheTier, EvictionReason};
use npc_providers::MetricsRecorder;
use npc_providers::metrics::{FacadeMetricsRecorder, NullMetricsRecorder};
use std::sync::Arc;
use std::time::Duration;

fn exercise(recorder: &dyn MetricsRecorder) {
    recorder.record_hit(CacheTier::Local, "foods");
    recorder.record_miss(CacheTier::Remote, "foods");
    recorder.record_error(CacheTier::Remote, "timeout");
    recorder.record_latency(CacheTier::Combined, "get", Duration::from_millis(3));
    recorder.set_entry_count(CacheTier::Local, 42);
    recorder.record_evictions(CacheTier::Local, EvictionReason::Capacity, 2);
    recorder.record_evictions(CacheTier::Local, EvictionReason::Expired, 0);
}

#[test]
fn test_null_recorder_accepts_everything() {
    exercise(&NullMetricsRecorder::new());
}

#[test]
fn test_facade_recorder_without_exporter_is_noop() {
    FacadeMetricsRecorder::register_descriptions();
    exercise(&FacadeMetricsRecorder::new());
}

#[test]
fn test_recorders_are_shareable_across_threads() {
    let recorder: Arc<dyn MetricsRecorder> = Arc::new(FacadeMetricsRecorder::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let recorder = Arc::clone(&recorder);
            std::thread::spawn(move || exercise(recorder.as_ref()))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
