//! Degraded Remote Tier Tests
//!
//! The remote tier is unreachable or slow for the whole test; every operation
//! must still complete from the local tier within the remote deadline.

use crate::test_utils::{manager_with_memory_remote, test_cache_config};
use npc_domain::ports::RemoteStore;
use npc_domain::{BackendFailure, CacheKey, CacheTier, Error};
use npc_infrastructure::config::CacheConfig;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_unreachable_remote_degrades_to_local_only() {
    let (cache, remote, metrics) = manager_with_memory_remote(&test_cache_config());
    remote.set_available(false);
    let key = CacheKey::new("foods", "apple");

    cache.set(&key, &52).await.unwrap();
    let kcal: u32 = cache.get(&key).await.unwrap();
    assert_eq!(kcal, 52);

    let produced: u32 = cache
        .get_or_set(&CacheKey::new("foods", "pear"), || async { Ok::<_, String>(57) })
        .await
        .unwrap();
    assert_eq!(produced, 57);

    assert!(
        cache
            .get_raw(&CacheKey::new("foods", "plum"))
            .await
            .unwrap_err()
            .is_cache_miss()
    );

    assert!(metrics.errors(CacheTier::Remote, "connection") >= 3);
}

#[tokio::test]
async fn test_delete_surfaces_remote_failure_after_local_removal() {
    let (cache, remote, metrics) = manager_with_memory_remote(&test_cache_config());
    let key = CacheKey::new("foods", "apple");
    cache.set(&key, &52).await.unwrap();

    remote.set_available(false);
    let err = cache.delete(&key).await.unwrap_err();

    assert!(matches!(
        err,
        Error::BackendUnavailable {
            kind: BackendFailure::Connection,
            ..
        }
    ));
    assert_eq!(cache.local_len(), 0);
    assert_eq!(metrics.errors(CacheTier::Remote, "connection"), 1);
}

#[tokio::test]
async fn test_invalidation_is_partial_when_remote_fails() {
    let (cache, remote, _) = manager_with_memory_remote(&test_cache_config());
    for name in ["apple", "pear"] {
        cache.set(&CacheKey::new("foods", name), &1).await.unwrap();
    }

    remote.set_available(false);
    let err = cache.invalidate_pattern("foods:*").await.unwrap_err();

    match err {
        Error::PartialInvalidation {
            pattern,
            removed,
            errors,
        } => {
            assert_eq!(pattern, "foods:*");
            assert_eq!(removed, 0);
            assert_eq!(errors.len(), 1);
        }
        other => panic!("Expected PartialInvalidation, got {other:?}"),
    }
    assert_eq!(cache.local_len(), 0);

    remote.set_available(true);
    assert_eq!(remote.keys("foods:*").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_slow_remote_is_bounded_by_timeout() {
    let config = CacheConfig {
        remote_timeout_ms: 50,
        ..test_cache_config()
    };
    let (cache, remote, metrics) = manager_with_memory_remote(&config);
    remote.set_latency(Duration::from_secs(5));
    let key = CacheKey::new("foods", "apple");

    let start = Instant::now();
    assert!(cache.get_raw(&key).await.unwrap_err().is_cache_miss());
    cache.set(&key, &52).await.unwrap();
    let kcal: u32 = cache.get(&key).await.unwrap();
    assert_eq!(kcal, 52);
    assert!(start.elapsed() < Duration::from_secs(2));

    assert_eq!(metrics.errors(CacheTier::Remote, "timeout"), 2);
}

#[tokio::test]
async fn test_local_hits_never_wait_for_remote() {
    let config = CacheConfig {
        remote_timeout_ms: 1_000,
        ..test_cache_config()
    };
    let (cache, remote, _) = manager_with_memory_remote(&config);
    let key = CacheKey::new("foods", "apple");
    cache.set(&key, &52).await.unwrap();

    remote.set_latency(Duration::from_secs(5));
    let start = Instant::now();
    for _ in 0..100 {
        let _: u32 = cache.get(&key).await.unwrap();
    }
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[tokio::test]
async fn test_remote_calls_are_cancelled_by_shutdown() {
    let (cache, remote, metrics) = manager_with_memory_remote(&test_cache_config());
    cache.shutdown().await;

    let key = CacheKey::new("foods", "apple");
    cache.set(&key, &52).await.unwrap();
    let kcal: u32 = cache.get(&key).await.unwrap();
    assert_eq!(kcal, 52);

    assert_eq!(metrics.errors(CacheTier::Remote, "cancelled"), 1);
    assert_eq!(remote.get("foods:apple").await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_after_shutdown_reports_cancelled_remote() {
    let (cache, remote, _) = manager_with_memory_remote(&test_cache_config());
    let key = CacheKey::new("foods", "apple");
    cache.set(&key, &52).await.unwrap();
    cache.shutdown().await;

    let err = cache.delete(&key).await.unwrap_err();

    assert!(matches!(
        err,
        Error::BackendUnavailable {
            kind: BackendFailure::Cancelled,
            ..
        }
    ));
    assert_eq!(cache.local_len(), 0);
    assert!(remote.get("foods:apple").await.unwrap().is_some());
}

#[tokio::test]
async fn test_dropped_get_leaves_local_tier_untouched() {
    let config = CacheConfig {
        remote_timeout_ms: 5_000,
        ..test_cache_config()
    };
    let (cache, remote, _) = manager_with_memory_remote(&config);
    remote
        .set("foods:apple", b"52", Duration::from_secs(60))
        .await
        .unwrap();
    remote.set_latency(Duration::from_secs(1));

    let key = CacheKey::new("foods", "apple");
    let outcome = tokio::time::timeout(Duration::from_millis(50), cache.get_raw(&key)).await;

    assert!(outcome.is_err());
    assert_eq!(cache.local_len(), 0);
}
