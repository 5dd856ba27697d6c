//! Metrics Recorder Implementations
//!
//! | Recorder | Description |
//! |----------|-------------|
//! | [`FacadeMetricsRecorder`] | Emits through the `metrics` facade; any installed exporter picks it up |
//! | [`NullMetricsRecorder`] | Discards everything, used when metrics are disabled |

pub mod facade;
pub mod null;

pub use facade::FacadeMetricsRecorder;
pub use null::NullMetricsRecorder;
