//! # Infrastructure Layer
//!
//! Two-tier cache orchestration and the cross-cutting concerns around it.
//!
//! ## Module Categories
//!
//! ### Caching
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | `LocalCache`, `CacheManager`, background sweep, wiring from config |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`metrics`] | Prometheus exporter installation |

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod metrics;
pub mod utils;

// Re-export commonly used types
pub use cache::{CacheManager, CacheStats, InvalidationSummary, LocalCache, build_cache_manager};
pub use config::{AppConfig, CacheConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use utils::TimedOperation;
