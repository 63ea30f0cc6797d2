//! Custom OpenTelemetry tracer provider with file-based span export.
//!
//! This module implements a custom `SpanExporter` that writes spans to a
//! rotating JSON file instead of sending them over the network. Traces stay
//! available for offline analysis without an OTLP collector running.

use super::file_writer::TraceFileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope recorded in every exported document.
const SCOPE: &str = "pixquest";

/// File-based OpenTelemetry span exporter.
///
/// Implements the `SpanExporter` trait to write spans to a rotating file in
/// OTLP JSON format. Each export call produces one complete OTLP document
/// carrying resource attributes and scope information.
struct FileSpanExporter {
    /// Trace file writer with rotation support.
    writer: TraceFileWriter,
    /// OTLP JSON formatter.
    formatter: SpanFormatter,
    /// Shutdown flag (prevents export after shutdown).
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    /// Creates an exporter writing OTLP JSON lines to `file_path`.
    const fn new(file_path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: TraceFileWriter::new(file_path),
            formatter: SpanFormatter::new(resource, SCOPE),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    /// Exports a batch of spans to the file.
    ///
    /// Formats the batch as one OTLP JSON document and appends it as a single
    /// line, so each line of the trace file parses independently.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let json = self.formatter.format_batch(&batch);
        let json_string = json.to_string();

        match self.writer.append_line(&json_string) {
            Ok(()) => Box::pin(std::future::ready(Ok(()))),
            Err(e) => Box::pin(std::future::ready(Err(TraceError::from(e.to_string())))),
        }
    }

    /// Shuts down the exporter.
    ///
    /// Sets the shutdown flag to prevent further exports. The file handle
    /// closes on drop.
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// Updates the resource metadata.
    ///
    /// No-op: the resource is fixed at construction.
    fn set_resource(&mut self, res: &Resource) {
        let _ = res;
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider exporting spans to `file_path`.
///
/// The provider uses a simple (immediate, non-batched) export strategy so
/// spans reach the file as soon as they close; the process never lingers to
/// flush a batch queue on exit.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
