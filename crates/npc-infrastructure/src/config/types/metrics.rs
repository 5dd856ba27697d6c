//! Metrics configuration types

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Metrics configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Address for the Prometheus scrape endpoint; `None` installs no exporter
    pub prometheus_listen: Option<SocketAddr>,
}
