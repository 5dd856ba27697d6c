//! # Domain Layer
//!
//! Core types and boundary contracts for the nutrition platform's two-tier cache.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Cache error taxonomy and `Result` alias |
//! | [`value_objects`] | `CacheKey`, key patterns, tier and failure labels |
//! | [`ports`] | `RemoteStore` and `MetricsRecorder` traits implemented by providers |
//! | [`constants`] | Domain defaults shared by every layer |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{MetricsRecorder, RemoteStore};
pub use value_objects::{
    BackendFailure, CacheKey, CacheTier, EvictionReason, build_key, matches_pattern,
    namespace_pattern,
};
