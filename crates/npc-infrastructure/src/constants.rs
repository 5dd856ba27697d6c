//! Infrastructure layer constants
//!
//! Cache defaults shared with the domain are re-exported from `npc_domain::constants`.

pub use npc_domain::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_LOCAL_CAPACITY, DEFAULT_MAX_VALUE_SIZE,
    DEFAULT_REMOTE_TIMEOUT_MS, DEFAULT_SWEEP_INTERVAL_SECS, MAX_CACHE_TTL_SECS,
};

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "npc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "npc";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "NPC";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Timeout for the initial remote ping during wiring (milliseconds)
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;

/// Maximum number of keys sent in one remote bulk delete
pub const INVALIDATION_BATCH_SIZE: usize = 500;

/// How long `shutdown` waits for the sweeper to finish
pub const SWEEPER_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "NPC_LOG";

/// File stem used for rolling log files when none can be derived
pub const DEFAULT_LOG_FILE_STEM: &str = "npc";
