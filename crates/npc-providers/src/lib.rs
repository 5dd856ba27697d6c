//! # Providers
//!
//! Adapters implementing the ports defined in `npc-domain`.
//!
//! | Port | Trait | Implementations |
//! |------|-------|-----------------|
//! | Remote tier | `RemoteStore` | Redis, InMemory |
//! | Metrics | `MetricsRecorder` | Facade (`metrics` crate), Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! npc-providers = { version = "0.1", default-features = false, features = ["remote-memory"] }
//! ```

// Re-export npc-domain types commonly used with providers
pub use npc_domain::error::{Error, Result};
pub use npc_domain::ports::{MetricsRecorder, RemoteStore};

/// Provider-specific constants
pub mod constants;

/// Metrics recorder implementations
///
/// Implements `MetricsRecorder` for the `metrics` facade and a no-op sink.
pub mod metrics;

/// Remote store implementations
///
/// Implements `RemoteStore` for Redis and an in-process stand-in.
pub mod remote;
