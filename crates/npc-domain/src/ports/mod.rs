//! Domain Port Interfaces
//!
//! Boundary contracts implemented outside the domain:
//!
//! - **remote_store** - networked key-value tier (Redis, in-memory fake)
//! - **metrics** - counters, gauges and histograms emitted by the cache

/// Metrics sink port
pub mod metrics;
/// Remote key-value store port
pub mod remote_store;

pub use metrics::MetricsRecorder;
pub use remote_store::RemoteStore;
