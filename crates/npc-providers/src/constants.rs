//! Provider-specific constants

// ============================================================================
// REDIS CONSTANTS
// ============================================================================

/// Default Redis endpoint used when only host/port are known
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

/// `COUNT` hint passed to each `SCAN` step when listing keys
pub const REDIS_SCAN_COUNT: usize = 500;

// ============================================================================
// IN-MEMORY STORE CONSTANTS
// ============================================================================

/// Default entry bound of the in-memory remote store
pub const MEMORY_STORE_DEFAULT_CAPACITY: u64 = 100_000;

// ============================================================================
// METRIC NAMES
// ============================================================================

/// Hits per tier and namespace
pub const METRIC_CACHE_HITS: &str = "npc_cache_hits_total";

/// Misses per tier and namespace
pub const METRIC_CACHE_MISSES: &str = "npc_cache_misses_total";

/// Errors per tier and error type
pub const METRIC_CACHE_ERRORS: &str = "npc_cache_errors_total";

/// Operation latency per tier and operation
pub const METRIC_CACHE_DURATION: &str = "npc_cache_operation_duration_seconds";

/// Current entry count per tier
pub const METRIC_CACHE_ENTRIES: &str = "npc_cache_entries";

/// Evictions per tier and reason
pub const METRIC_CACHE_EVICTIONS: &str = "npc_cache_evictions_total";
