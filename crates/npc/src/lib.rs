//! # Nutrition Platform Cache
//!
//! Two-tier (in-process + Redis) cache for the nutrition platform backend,
//! plus the `npc` admin CLI used by data-import scripts.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `npc stats` | Sizes, hit ratio and remote health as JSON |
//! | `npc get <ns> <key> [--version V]` | Print a cached value |
//! | `npc delete <ns> <key> [--version V]` | Remove a key from both tiers |
//! | `npc invalidate <pattern>` | Remove every matching key, e.g. `foods:*` |

pub mod cli;

pub use cli::{Cli, Command, execute, run};

// Re-export the cache API for library users
pub use npc_domain::{CacheKey, Error, Result};
pub use npc_infrastructure::cache::{CacheManager, build_cache_manager};
pub use npc_infrastructure::config::{AppConfig, ConfigLoader};
