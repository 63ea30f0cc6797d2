//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with OpenTelemetry
//! integration, wiring the complete pipeline from `tracing` macros to the
//! rotating OTLP trace file, plus a human-readable log layer on stderr.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by level
/// 2. Prints human-readable log lines to stderr
/// 3. Exports spans as OTLP JSON to a rotating file with backups
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, when set
/// 2. `trace_level` from the configuration file
/// 3. Default: `"info"`
///
/// # File Location
///
/// Traces land in the platform data directory, for example
/// `~/.local/share/pixquest/pixquest-otlp.json` on Linux.
///
/// # Initialization Behavior
///
/// - Creates the data directory when it does not exist
/// - Degrades to no tracing when the directory cannot be created;
///   observability must never stop the application from starting
/// - Idempotent: only the first call installs a subscriber
///
/// Log lines go to stderr so they never interleave with the gallery
/// rendering on stdout.
///
/// # Example
///
/// ```no_run
/// use pixquest::observability::init_tracing;
/// use pixquest::Config;
///
/// let config = Config {
///     trace_level: "debug".to_string(),
///     ..Config::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.trace_level));

    let Ok(trace_file) = paths::trace_file_path() else {
        return;
    };
    if paths::ensure_parent_dir(&trace_file).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "pixquest",
    )]);

    let provider = tracer::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer("pixquest");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(log_layer)
        .with(otel_layer);

    let _ = subscriber.try_init();
}
