//! Domain layer constants
//!
//! Defaults that are part of the cache contract itself. Infrastructure-specific
//! constants (config file names, env prefixes) live in `npc_infrastructure::constants`.

// ============================================================================
// CACHE KEY CONSTANTS
// ============================================================================

/// Delimiter between the parts of a fully-qualified cache key
pub const CACHE_KEY_DELIMITER: char = ':';

/// Prefix placed before the version segment of a key (`ns:key:v2`)
pub const CACHE_KEY_VERSION_PREFIX: &str = "v";

/// Wildcard accepted by pattern invalidation
pub const CACHE_PATTERN_WILDCARD: char = '*';

// ============================================================================
// CACHE POLICY CONSTANTS
// ============================================================================

/// Default TTL for cache entries (5 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Longest TTL either tier will honour (10 years); longer TTLs are clamped
pub const MAX_CACHE_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Default number of entries held by the local tier
pub const DEFAULT_LOCAL_CAPACITY: usize = 10_000;

/// Default upper bound for a serialized value (1 MiB)
pub const DEFAULT_MAX_VALUE_SIZE: usize = 1024 * 1024;

/// Default interval of the background expiry sweep (5 minutes)
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;

/// Default deadline applied to every remote-tier call
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 250;
