//! Admin command line interface

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use npc_domain::{CacheKey, Error};
use npc_infrastructure::cache::{CacheManager, build_cache_manager};
use npc_infrastructure::config::ConfigLoader;
use npc_infrastructure::logging::init_logging;
use npc_infrastructure::metrics::install_prometheus_exporter;
use std::path::PathBuf;
use tracing::info;

/// Command line interface for the nutrition platform cache
#[derive(Parser, Debug)]
#[command(name = "npc")]
#[command(about = "Nutrition Platform Cache - inspect and invalidate cached data")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Admin operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print cache statistics as JSON
    Stats,

    /// Print the raw value cached under a key
    Get {
        /// Key namespace, e.g. `foods`
        namespace: String,
        /// Key within the namespace
        key: String,
        /// Optional key version
        #[arg(long)]
        version: Option<String>,
    },

    /// Remove a key from both tiers
    Delete {
        /// Key namespace
        namespace: String,
        /// Key within the namespace
        key: String,
        /// Optional key version
        #[arg(long)]
        version: Option<String>,
    },

    /// Remove every key matching a pattern (`*`, `prefix*` or an exact key)
    Invalidate {
        /// Pattern to invalidate
        pattern: String,
    },
}

fn cache_key(namespace: &str, key: &str, version: Option<&String>) -> CacheKey {
    let cache_key = CacheKey::new(namespace, key);
    match version {
        Some(version) => cache_key.with_version(version.as_str()),
        None => cache_key,
    }
}

/// Run one command against `cache`, returning what should be printed
pub async fn execute(cache: &CacheManager, command: &Command) -> anyhow::Result<String> {
    match command {
        Command::Stats => {
            let stats = cache.stats().await;
            serde_json::to_string_pretty(&stats).context("Failed to render stats")
        }
        Command::Get {
            namespace,
            key,
            version,
        } => {
            let key = cache_key(namespace, key, version.as_ref());
            match cache.get_raw(&key).await {
                Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
                Err(Error::CacheMiss { key }) => bail!("Not cached: {key}"),
                Err(e) => Err(e.into()),
            }
        }
        Command::Delete {
            namespace,
            key,
            version,
        } => {
            let key = cache_key(namespace, key, version.as_ref());
            cache
                .delete(&key)
                .await
                .with_context(|| format!("Failed to delete {key}"))?;
            Ok(format!("Deleted {key}"))
        }
        Command::Invalidate { pattern } => {
            let summary = cache
                .invalidate_pattern(pattern)
                .await
                .with_context(|| format!("Failed to invalidate {pattern}"))?;
            Ok(format!(
                "Invalidated {pattern}: {} local, {} remote",
                summary.local_removed, summary.remote_removed
            ))
        }
    }
}

/// Load configuration, build the cache, run the command and shut down
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;
    install_prometheus_exporter(&config.metrics)?;

    let cache = build_cache_manager(&config.cache).await?;
    let outcome = execute(&cache, &cli.command).await;
    cache.shutdown().await;
    info!("Cache manager stopped");

    println!("{}", outcome?);
    Ok(())
}
