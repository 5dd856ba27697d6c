//! Configuration
//!
//! Layered configuration: built-in defaults, an optional TOML file, then
//! `NPC__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CacheConfig, LoggingConfig, MetricsConfig};
