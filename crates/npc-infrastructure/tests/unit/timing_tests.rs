//! Tests for timing helpers

use crate::recording_metrics::RecordingMetrics;
use npc_domain::CacheTier;
use npc_infrastructure::TimedOperation;
use std::time::Duration;

#[test]
fn test_elapsed_increases() {
    let timer = TimedOperation::start(CacheTier::Local, "get");
    std::thread::sleep(Duration::from_millis(5));
    assert!(timer.elapsed() >= Duration::from_millis(5));
}

#[test]
fn test_finish_records_one_sample() {
    let metrics = RecordingMetrics::default();
    let timer = TimedOperation::start(CacheTier::Remote, "set");
    std::thread::sleep(Duration::from_millis(2));

    let elapsed = timer.finish(&metrics);

    assert_eq!(metrics.latency_samples(CacheTier::Remote, "set"), vec![elapsed]);
    assert!(elapsed >= Duration::from_millis(2));
    assert!(metrics.latency_samples(CacheTier::Local, "set").is_empty());
}
