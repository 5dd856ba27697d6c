//! Two-tier caching
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`LocalCache`] | Bounded in-process tier with TTL and LRU eviction |
//! | [`CacheManager`] | Cache-aside protocol over the local and remote tiers |
//! | [`build_cache_manager`] | Wires a manager from [`CacheConfig`](crate::config::CacheConfig) |
//!
//! ## Example
//!
//! ```ignore
//! use npc_domain::CacheKey;
//! use npc_infrastructure::cache::build_cache_manager;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(build_cache_manager(&config.cache).await?);
//! let key = CacheKey::new("foods", "apple").with_version("2");
//! let food: Food = cache.get_or_set(&key, || repo.load_food("apple")).await?;
//! cache.invalidate_pattern("foods:*").await?;
//! cache.shutdown().await;
//! ```

pub mod codec;
pub mod factory;
pub mod local;
pub mod manager;
mod sweeper;

pub use factory::{build_cache_manager, metrics_recorder};
pub use local::{EntryInfo, LocalCache, LocalLookup};
pub use manager::{CacheManager, CacheStats, InvalidationSummary};
