//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides distributed tracing for the application, exporting
//! spans in OpenTelemetry OTLP JSON format to a rotating file under the
//! platform data directory. Fetch tasks carry trace context across the task
//! boundary, so one search submission reads as a single trace from event to
//! completed fetch.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON File
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: traces land next to the application's data,
//!   `~/.local/share/pixquest/pixquest-otlp.json` on Linux
//! - **Automatic Rotation**: files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: standard OpenTelemetry Protocol JSON, one document
//!   per line
//! - **Stderr Logs**: a human-readable log layer on stderr, kept off stdout
//!   so it never corrupts the gallery rendering
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the configuration file
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing once, right after loading configuration:
//!
//! ```no_run
//! use pixquest::observability::init_tracing;
//! use pixquest::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("application initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `tracer`: Custom OpenTelemetry tracer provider with file export
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod span_formatter;
mod tracer;

pub mod init;

pub use init::init_tracing;
