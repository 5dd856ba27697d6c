//! Background Sweep Tests

use crate::test_utils::{local_only_manager, test_cache_config};
use npc_domain::{CacheKey, CacheTier, EvictionReason};
use npc_infrastructure::config::CacheConfig;
use std::time::Duration;

fn sweep_config() -> CacheConfig {
    CacheConfig {
        sweep_interval_secs: 10,
        ..test_cache_config()
    }
}

#[tokio::test(start_paused = true)]
async fn test_sweeper_removes_expired_entries() {
    let (cache, metrics) = local_only_manager(&sweep_config());
    cache
        .set(&CacheKey::new("ns", "short").with_ttl_secs(5), &1)
        .await
        .unwrap();
    cache
        .set(&CacheKey::new("ns", "long").with_ttl_secs(60), &2)
        .await
        .unwrap();

    // Let the sweeper fire once
    tokio::time::sleep(Duration::from_secs(11)).await;

    assert_eq!(cache.local_len(), 1);
    assert_eq!(metrics.evictions(CacheTier::Local, EvictionReason::Expired), 1);
    assert_eq!(metrics.entry_count(CacheTier::Local), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_sweep_on_demand() {
    let (cache, _) = local_only_manager(&sweep_config());
    cache
        .set(&CacheKey::new("ns", "k").with_ttl_secs(1), &1)
        .await
        .unwrap();

    tokio::time::advance(Duration::from_secs(2)).await;

    assert_eq!(cache.sweep_expired(), 1);
    assert_eq!(cache.local_len(), 0);
}

#[tokio::test]
async fn test_shutdown_stops_sweeper() {
    let (cache, _) = local_only_manager(&sweep_config());
    assert_eq!(cache.active_tasks(), 1);
    assert!(!cache.is_shutting_down());

    assert!(cache.shutdown().await);

    assert_eq!(cache.active_tasks(), 0);
    assert!(cache.is_shutting_down());
}

#[tokio::test]
async fn test_shutdown_is_idempotent() {
    let (cache, _) = local_only_manager(&sweep_config());
    assert!(cache.shutdown().await);
    assert!(cache.shutdown().await);
    assert_eq!(cache.active_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_no_sweep_after_shutdown() {
    let (cache, metrics) = local_only_manager(&sweep_config());
    cache
        .set(&CacheKey::new("ns", "k").with_ttl_secs(1), &1)
        .await
        .unwrap();
    cache.shutdown().await;

    tokio::time::sleep(Duration::from_secs(30)).await;

    assert_eq!(cache.local_len(), 1);
    assert_eq!(metrics.evictions(CacheTier::Local, EvictionReason::Expired), 0);
}
