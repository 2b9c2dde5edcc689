//! # Trace Metadata
//!
//! Span metadata carried by every emitted event.
//!
//! A command may arrive with the `meta` of an earlier event; the engine then
//! continues that trace instead of starting a new one, so events produced by
//! nested engine calls share a `traceId` and link through `parentSpanId`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceMeta {
    pub trace_id: String,
    pub span_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub ts: DateTime<Utc>,
}

impl TraceMeta {
    /// The metadata as a JSON object, suitable as inbound `meta` of a command.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn text(meta: &Map<String, Value>, key: &str) -> Option<String> {
    meta.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Start the base span for handling one command.
///
/// Continues the inbound trace when `inbound` carries a `traceId`; the inbound
/// `spanId` becomes the parent. `correlationId` is copied through.
#[must_use]
pub fn start_trace(source: &str, inbound: Option<&Map<String, Value>>) -> TraceMeta {
    let (trace_id, parent_span_id, correlation_id) = match inbound {
        Some(meta) => (
            text(meta, "traceId").unwrap_or_else(new_id),
            text(meta, "spanId"),
            text(meta, "correlationId"),
        ),
        None => (new_id(), None, None),
    };

    TraceMeta {
        trace_id,
        span_id: new_id(),
        parent_span_id,
        correlation_id,
        source: Some(source.to_string()),
        action: None,
        scope: None,
        ts: Utc::now(),
    }
}

/// A child of `base` for one action within a scope.
#[must_use]
pub fn child_span(base: &TraceMeta, action: &str, scope: &str) -> TraceMeta {
    TraceMeta {
        trace_id: base.trace_id.clone(),
        span_id: new_id(),
        parent_span_id: Some(base.span_id.clone()),
        correlation_id: base.correlation_id.clone(),
        source: base.source.clone(),
        action: Some(action.to_string()),
        scope: Some(scope.to_string()),
        ts: Utc::now(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_trace_without_inbound_meta() {
        let base = start_trace("Engine", None);
        assert!(base.parent_span_id.is_none());
        assert_ne!(base.trace_id, base.span_id);
        assert_eq!(base.source.as_deref(), Some("Engine"));
    }

    #[test]
    fn inbound_trace_is_continued() {
        let inbound = json!({"traceId": "t-1", "spanId": "s-1", "correlationId": "c-1"});
        let base = start_trace("Engine", inbound.as_object());
        assert_eq!(base.trace_id, "t-1");
        assert_eq!(base.parent_span_id.as_deref(), Some("s-1"));
        assert_eq!(base.correlation_id.as_deref(), Some("c-1"));
    }

    #[test]
    fn inbound_correlation_without_trace_starts_new_trace() {
        let inbound = json!({"correlationId": "c-9"});
        let base = start_trace("Engine", inbound.as_object());
        assert_eq!(base.correlation_id.as_deref(), Some("c-9"));
        assert!(base.parent_span_id.is_none());
    }

    #[test]
    fn child_links_to_base() {
        let base = start_trace("Engine", None);
        let child = child_span(&base, "aspect.created", "aspect");
        assert_eq!(child.trace_id, base.trace_id);
        assert_eq!(child.parent_span_id.as_deref(), Some(base.span_id.as_str()));
        assert_eq!(child.action.as_deref(), Some("aspect.created"));
        assert_eq!(child.scope.as_deref(), Some("aspect"));
    }

    #[test]
    fn map_roundtrips_into_next_trace() {
        let child = child_span(&start_trace("Engine", None), "x", "y");
        let next = start_trace("Engine", Some(&child.to_map()));
        assert_eq!(next.trace_id, child.trace_id);
        assert_eq!(next.parent_span_id, Some(child.span_id));
    }
}
