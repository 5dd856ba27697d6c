//! Cache Factory Tests

use crate::test_utils::test_cache_config;
use npc_domain::Error;
use npc_infrastructure::cache::{build_cache_manager, metrics_recorder};
use npc_infrastructure::config::CacheConfig;

#[tokio::test]
async fn test_build_without_redis_is_local_only() {
    let cache = build_cache_manager(&test_cache_config()).await.unwrap();
    assert!(!cache.has_remote());
    assert!(cache.remote_ping().await.is_err());
    cache.shutdown().await;
}

#[tokio::test]
async fn test_unreachable_redis_falls_back_to_local_only() {
    let config = CacheConfig {
        redis_url: Some("redis://127.0.0.1:1".to_string()),
        ..test_cache_config()
    };

    let cache = build_cache_manager(&config).await.unwrap();
    assert!(!cache.has_remote());
    cache.shutdown().await;
}

#[tokio::test]
async fn test_invalid_redis_url_is_configuration_error() {
    let config = CacheConfig {
        redis_url: Some("definitely not a url".to_string()),
        ..test_cache_config()
    };

    let err = build_cache_manager(&config).await.unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_manager_requires_runtime() {
    let err = npc_infrastructure::cache::CacheManager::new(
        &test_cache_config(),
        None,
        metrics_recorder(&test_cache_config()),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Infrastructure { .. }));
}

#[test]
fn test_metrics_recorder_follows_flag() {
    let enabled = metrics_recorder(&CacheConfig::default());
    assert!(format!("{enabled:?}").contains("Facade"));

    let disabled = metrics_recorder(&CacheConfig {
        metrics_enabled: false,
        ..CacheConfig::default()
    });
    assert!(format!("{disabled:?}").contains("Null"));
}
