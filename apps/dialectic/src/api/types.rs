//! # API Request/Response Types
//!
//! JSON bodies of the HTTP API. Every response that can fail carries
//! `success` and an optional `error` message next to its payload.

use dialectic_core::aspect::AspectSummary;
use dialectic_core::{AspectRecord, DialecticIR, Event, IntegrityReport, RegistryEntry};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// COMMAND RESPONSE
// =============================================================================

/// Result of `POST /command`. The request body is a `CommandEnvelope`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(default)]
    pub events: Vec<Event>,
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn success(events: Vec<Event>) -> Self {
        Self {
            success: true,
            events,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            events: Vec::new(),
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// ASPECT RESPONSE
// =============================================================================

/// Stored aspect with its `describe` projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspectResponse {
    pub success: bool,
    pub aspect: Option<AspectRecord>,
    pub summary: Option<AspectSummary>,
    pub error: Option<String>,
}

impl AspectResponse {
    pub fn found(aspect: AspectRecord, summary: AspectSummary) -> Self {
        Self {
            success: true,
            aspect: Some(aspect),
            summary: Some(summary),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            aspect: None,
            summary: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// REGISTRY RESPONSES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryListResponse {
    pub count: usize,
    pub entries: Vec<RegistryEntry>,
}

/// A loaded aggregate, by key or by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrResponse {
    pub success: bool,
    pub entry: Option<RegistryEntry>,
    pub ir: Option<DialecticIR>,
    pub error: Option<String>,
    /// Candidate keys when an id is ambiguous.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
}

impl IrResponse {
    pub fn success(entry: RegistryEntry, ir: DialecticIR) -> Self {
        Self {
            success: true,
            entry: Some(entry),
            ir: Some(ir),
            error: None,
            keys: Vec::new(),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            entry: None,
            ir: None,
            error: Some(msg.into()),
            keys: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_keys(mut self, keys: Vec<String>) -> Self {
        self.keys = keys;
        self
    }
}

// =============================================================================
// EXPORT REQUEST/RESPONSE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub key: String,
}

/// Export response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    pub success: bool,
    pub data: Option<String>, // Base64 encoded
    /// BLAKE3 hex digest of the decoded bytes.
    pub checksum: Option<String>,
    pub error: Option<String>,
}

impl ExportResponse {
    pub fn success(data: &[u8], checksum: String) -> Self {
        Self {
            success: true,
            data: Some(base64::Engine::encode(
                &base64::engine::general_purpose::STANDARD,
                data,
            )),
            checksum: Some(checksum),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            checksum: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// INTEGRITY RESPONSE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityResponse {
    pub clean: bool,
    pub report: IntegrityReport,
}

// =============================================================================
// EVENTS
// =============================================================================

/// Query string of `GET /events`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub count: usize,
    pub events: Vec<Event>,
}
