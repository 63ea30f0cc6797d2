//! OTLP JSON span formatter.
//!
//! This module converts OpenTelemetry span data into OTLP (OpenTelemetry
//! Protocol) JSON format for file export. The output matches what OTLP trace
//! collectors and analysis tools expect.

use std::time::{SystemTime, UNIX_EPOCH};

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};

/// OTLP JSON span formatter.
///
/// Formats batches of spans into complete OTLP documents carrying the
/// resource attributes and instrumentation scope they were recorded under.
pub struct SpanFormatter {
    /// OpenTelemetry resource metadata (service name, etc.).
    resource: Resource,
    /// Instrumentation scope name embedded in each document.
    scope: &'static str,
}

impl SpanFormatter {
    /// Creates a formatter for the given resource and scope name.
    pub const fn new(resource: Resource, scope: &'static str) -> Self {
        Self { resource, scope }
    }

    /// Formats a batch of spans as one OTLP JSON document.
    ///
    /// The document nests `resourceSpans` → `scopeSpans` → `spans`, with the
    /// resource attributes rendered once and every span of the batch under a
    /// single scope. Serialize the returned value with `.to_string()` to get
    /// one line of the trace file.
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(k, v)| {
                json!({
                    "key": k.to_string(),
                    "value": Self::format_attribute_value(v)
                })
            })
            .collect();

        let spans_json: Vec<JsonValue> = batch.iter().map(Self::format_span).collect();

        json!({
            "resourceSpans": [{
                "resource": {
                    "attributes": resource_attrs
                },
                "scopeSpans": [{
                    "scope": {
                        "name": self.scope,
                    },
                    "spans": spans_json
                }]
            }]
        })
    }

    /// Formats a single span as OTLP JSON.
    ///
    /// IDs become fixed-width hex strings (32 chars for the trace ID, 16 for
    /// span IDs), timestamps become nanoseconds since the Unix epoch, and the
    /// status collapses to the OTLP integer code plus message.
    fn format_span(span: &SpanData) -> JsonValue {
        let (status_code, status_message) = Self::format_status(&span.status);

        json!({
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": if span.parent_span_id == SpanId::INVALID {
                String::new()
            } else {
                format!("{:016x}", span.parent_span_id)
            },
            "name": span.name,
            "kind": Self::span_kind_to_int(&span.span_kind),
            "startTimeUnixNano": Self::unix_nanos(span.start_time),
            "endTimeUnixNano": Self::unix_nanos(span.end_time),
            "attributes": Self::format_attributes(&span.attributes),
            "events": Self::format_events(&span.events),
            "links": Self::format_links(&span.links),
            "status": {
                "code": status_code,
                "message": status_message,
            },
        })
    }

    /// Renders a timestamp as decimal nanoseconds since the Unix epoch.
    ///
    /// OTLP carries the value as a string to survive 64-bit JSON readers.
    fn unix_nanos(time: SystemTime) -> String {
        time.duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
            .to_string()
    }

    /// Converts span kind to its OTLP integer code.
    const fn span_kind_to_int(kind: &SpanKind) -> u8 {
        match kind {
            SpanKind::Internal => 1,
            SpanKind::Server => 2,
            SpanKind::Client => 3,
            SpanKind::Producer => 4,
            SpanKind::Consumer => 5,
        }
    }

    /// Formats span attributes as an OTLP `{"key", "value"}` array.
    fn format_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
        attributes
            .iter()
            .map(|kv| {
                json!({
                    "key": kv.key.to_string(),
                    "value": Self::format_attribute_value(&kv.value)
                })
            })
            .collect()
    }

    /// Formats an attribute value in OTLP's typed-value encoding.
    ///
    /// Integers are rendered as strings per the OTLP JSON mapping; arrays
    /// fall back to their debug rendering.
    fn format_attribute_value(value: &Value) -> JsonValue {
        match value {
            Value::Bool(b) => json!({ "boolValue": b }),
            Value::I64(i) => json!({ "intValue": i.to_string() }),
            Value::F64(f) => json!({ "doubleValue": f }),
            Value::String(s) => json!({ "stringValue": s.to_string() }),
            Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
        }
    }

    /// Formats span events with their timestamps and attributes.
    fn format_events(events: &[Event]) -> Vec<JsonValue> {
        events
            .iter()
            .map(|event| {
                json!({
                    "timeUnixNano": Self::unix_nanos(event.timestamp),
                    "name": event.name,
                    "attributes": Self::format_attributes(&event.attributes),
                })
            })
            .collect()
    }

    /// Formats span links with their trace coordinates and attributes.
    fn format_links(links: &[Link]) -> Vec<JsonValue> {
        links
            .iter()
            .map(|link| {
                json!({
                    "traceId": format!("{:032x}", link.span_context.trace_id()),
                    "spanId": format!("{:016x}", link.span_context.span_id()),
                    "attributes": Self::format_attributes(&link.attributes),
                })
            })
            .collect()
    }

    /// Collapses span status to the OTLP `(code, message)` pair.
    ///
    /// Unset is `(0, "")`, ok is `(1, "")`, error is `(2, description)`.
    fn format_status(status: &Status) -> (u8, String) {
        match status {
            Status::Unset => (0, String::new()),
            Status::Ok => (1, String::new()),
            Status::Error { description } => (2, description.to_string()),
        }
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
