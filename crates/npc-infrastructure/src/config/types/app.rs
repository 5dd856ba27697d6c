//! Top-level application configuration

use super::{CacheConfig, LoggingConfig, MetricsConfig};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Two-tier cache settings
    pub cache: CacheConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Metrics export settings
    pub metrics: MetricsConfig,
}
