//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros through OpenTelemetry into the OTLP file exporter.

use super::exporter::file_tracer_provider;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name reported as `service.name` and used for the tracer.
pub const SERVICE_NAME: &str = "askbar";

/// File name of the OTLP trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "askbar-otlp.json";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// The filter comes from `config.trace_level`, falling back to `"info"`.
/// Traces land in `~/.local/share/zellij/askbar/askbar-otlp.json` (seen as
/// `/host/...` from inside the sandbox).
///
/// Observability is optional: if the data directory cannot be created the
/// widget simply runs untraced. Only the first successful call installs a
/// subscriber; later calls are ignored.
///
/// # Example
///
/// ```rust
/// use askbar::observability::init_tracing;
/// use askbar::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
