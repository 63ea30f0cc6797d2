//! Fetch request tokens and cross-task trace context propagation.
//!
//! This module defines the request token attached to every fetch issued by the
//! session core. The token records the `(query, page)` pair the fetch targets,
//! which the completion handler compares against the live session to discard
//! stale responses. It also implements distributed tracing context propagation
//! across task boundaries so fetch spans parent to the span that issued them.

use crate::domain::ResultPage;
use serde::{Deserialize, Serialize};

/// Outcome of an issued fetch, as delivered back to the session core.
///
/// Errors cross the task boundary as plain strings; the transport error type
/// stays behind at the fetch task.
pub type FetchOutcome = std::result::Result<ResultPage, String>;

/// Distributed tracing context for cross-task span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when a fetch runs on a background task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id_str = format!("{:032x}", span_context.trace_id());
            let parent_span_id_str = format!("{:016x}", span_context.span_id());

            tracing::debug!(
                trace_id = %trace_id_str,
                parent_span_id = %parent_span_id_str,
                "capturing trace context"
            );

            Some(Self {
                trace_id: trace_id_str,
                parent_span_id: parent_span_id_str,
            })
        } else {
            tracing::debug!("span context is not valid");
            None
        }
    }
}

/// Token identifying one issued fetch.
///
/// Every fetch carries the `(query, page)` it was issued for. When the
/// response arrives, the session core applies it only if the token still
/// matches the session's current query and page; otherwise the response is
/// stale and is dropped. The optional trace context links the fetch task's
/// spans to the span that issued the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Search term this fetch targets.
    pub query: String,

    /// Page number this fetch targets (1-based).
    pub page: u32,

    /// Trace context for linking spans across tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_context: Option<TraceContext>,
}

impl FetchRequest {
    /// Creates a fetch request token with the current trace context attached.
    #[must_use]
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Reports whether this token still targets the given `(query, page)`.
    ///
    /// Used by the completion handler to detect stale responses: a result is
    /// applied only when the token matches the session's current query and
    /// page, so late-arriving responses for a superseded query cannot
    /// overwrite the newer session.
    #[must_use]
    pub fn matches(&self, query: &str, page: u32) -> bool {
        self.query == query && self.page == page
    }

    /// Rebuilds the OpenTelemetry context this fetch was issued under.
    ///
    /// Reconstructs a remote span context from the serialized hex IDs. The
    /// fetch task sets the result as the parent of its own span, so the work
    /// it does joins the trace of the span that issued the request even
    /// though it runs on another task.
    ///
    /// Returns `None` when the token carries no valid trace information.
    #[must_use]
    pub fn parent_trace_context(&self) -> Option<opentelemetry::Context> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = self.trace_context.as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::new().with_remote_span_context(span_context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_matches_its_own_coordinates() {
        let request = FetchRequest::new("cats", 2);
        assert!(request.matches("cats", 2));
    }

    #[test]
    fn token_rejects_changed_query_or_page() {
        let request = FetchRequest::new("dogs", 1);
        assert!(!request.matches("cats", 1));
        assert!(!request.matches("dogs", 2));
    }

    #[test]
    fn trace_context_absent_without_active_span() {
        let request = FetchRequest::new("cats", 1);
        assert!(request.trace_context.is_none());
        assert!(request.parent_trace_context().is_none());
    }

    #[test]
    fn parent_context_rebuilds_from_hex_ids() {
        use opentelemetry::trace::TraceContextExt;

        let mut request = FetchRequest::new("cats", 1);
        request.trace_context = Some(TraceContext {
            trace_id: "0102030405060708090a0b0c0d0e0f10".to_string(),
            parent_span_id: "0102030405060708".to_string(),
        });

        let context = request.parent_trace_context().expect("valid hex ids");
        let span = context.span();
        let span_context = span.span_context();
        assert!(span_context.is_valid());
        assert!(span_context.is_remote());
        assert_eq!(
            format!("{:032x}", span_context.trace_id()),
            "0102030405060708090a0b0c0d0e0f10"
        );
    }

    #[test]
    fn malformed_hex_ids_yield_no_parent_context() {
        let mut request = FetchRequest::new("cats", 1);
        request.trace_context = Some(TraceContext {
            trace_id: "not-hex".to_string(),
            parent_span_id: "nope".to_string(),
        });

        assert!(request.parent_trace_context().is_none());
    }
}
