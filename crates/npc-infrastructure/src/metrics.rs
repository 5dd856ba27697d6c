//! Prometheus metrics export
//!
//! Cache metrics are emitted through the `metrics` facade; this module only
//! installs the global exporter that serves them.

use crate::config::MetricsConfig;
use crate::error_ext::ErrorContext;
use metrics_exporter_prometheus::PrometheusBuilder;
use npc_domain::error::Result;
use npc_providers::metrics::FacadeMetricsRecorder;
use tracing::info;

/// Install the Prometheus HTTP exporter when a listen address is configured
///
/// Returns `false` when no address is set. Must be called from within a Tokio
/// runtime.
pub fn install_prometheus_exporter(config: &MetricsConfig) -> Result<bool> {
    let Some(addr) = config.prometheus_listen else {
        return Ok(false);
    };

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context(format!("Failed to install Prometheus exporter on {addr}"))?;

    FacadeMetricsRecorder::register_descriptions();
    info!("Prometheus metrics exporter listening on {}", addr);
    Ok(true)
}
