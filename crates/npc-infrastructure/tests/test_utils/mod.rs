//! Test utilities for npc-infrastructure integration tests


pub use recording_metrics::*;

use npc_domain::ports::RemoteStore;
use npc_infrastructure::cache::CacheManager;
use npc_infrastructure::config::CacheConfig;
use npc_providers::remote::InMemoryRemoteStore;
use std::sync::Arc;

/// Cache config with short timeouts suitable for tests
pub fn test_cache_config() -> CacheConfig {
    CacheConfig {
        remote_timeout_ms: 100,
        connect_timeout_ms: 200,
        ..CacheConfig::default()
    }
}

/// Manager over an in-memory remote tier, with recording metrics
pub fn manager_with_memory_remote(
    config: &CacheConfig,
) -> (CacheManager, InMemoryRemoteStore, Arc<RecordingMetrics>) {
    let remote = InMemoryRemoteStore::new();
    let metrics = Arc::new(RecordingMetrics::default());
    let shared: Arc<dyn RemoteStore> = Arc::new(remote.clone());
    let manager = CacheManager::new(config, Some(shared), metrics.clone())
        .expect("manager should build inside a runtime");
    (manager, remote, metrics)
}

/// Manager with no remote tier, with recording metrics
pub fn local_only_manager(config: &CacheConfig) -> (CacheManager, Arc<RecordingMetrics>) {
    let metrics = Arc::new(RecordingMetrics::default());
    let manager = CacheManager::new(config, None, metrics.clone())
        .expect("manager should build inside a runtime");
    (manager, metrics)
}
