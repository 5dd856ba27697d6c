//! Cache manager wiring
//!
//! Builds a [`CacheManager`] from configuration: connects the Redis remote
//! tier when one is configured and reachable, and picks the metrics sink.

use super::manager::CacheManager;
use crate::config::CacheConfig;
use npc_domain::error::Result;
use npc_domain::ports::{MetricsRecorder, RemoteStore};
use npc_providers::metrics::{FacadeMetricsRecorder, NullMetricsRecorder};
use npc_providers::remote::RedisRemoteStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Build a cache manager from configuration
///
/// An invalid Redis URL is a configuration error. An unreachable Redis server
/// is not: the manager then runs with the local tier only.
pub async fn build_cache_manager(config: &CacheConfig) -> Result<CacheManager> {
    let remote = match &config.redis_url {
        Some(url) => connect_remote(url, config.connect_timeout()).await?,
        None => {
            info!("No remote cache tier configured, using local cache only");
            None
        }
    };

    CacheManager::new(config, remote, metrics_recorder(config))
}

/// Metrics sink selected by `metrics_enabled`
pub fn metrics_recorder(config: &CacheConfig) -> Arc<dyn MetricsRecorder> {
    if config.metrics_enabled {
        Arc::new(FacadeMetricsRecorder::new())
    } else {
        Arc::new(NullMetricsRecorder::new())
    }
}

async fn connect_remote(url: &str, timeout: Duration) -> Result<Option<Arc<dyn RemoteStore>>> {
    let store = RedisRemoteStore::new(url)?;

    match tokio::time::timeout(timeout, store.ping()).await {
        Ok(Ok(())) => {
            info!(endpoint = store.endpoint(), "Connected to remote cache tier");
            Ok(Some(Arc::new(store)))
        }
        Ok(Err(e)) => {
            warn!(endpoint = store.endpoint(), error = %e, "Remote cache tier unreachable, using local cache only");
            Ok(None)
        }
        Err(_) => {
            warn!(
                endpoint = store.endpoint(),
                "Remote cache tier did not answer within {:?}, using local cache only", timeout
            );
            Ok(None)
        }
    }
}
