//! Value objects
//!
//! Immutable, side-effect-free types shared by the cache tiers.

mod cache_key;
mod labels;
mod pattern;

pub use cache_key::{CacheKey, build_key, namespace_pattern};
pub use labels::{BackendFailure, CacheTier, EvictionReason};
pub use pattern::matches_pattern;
