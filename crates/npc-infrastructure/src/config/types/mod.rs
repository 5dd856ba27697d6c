//! Configuration types module

pub mod app;
pub mod cache;
pub mod logging;
pub mod metrics;

// Re-export main types
pub use app::AppConfig;
pub use cache::CacheConfig;
pub use logging::LoggingConfig;
pub use metrics::MetricsConfig;
