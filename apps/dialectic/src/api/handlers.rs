//! # API Endpoint Handlers
//!
//! Errors map to status codes through [`status_for`]: validation 400,
//! missing aspect/key/module 404, ambiguous id 409, everything else 500.

use super::{
    AppState,
    types::{
        AspectResponse, CommandResponse, EventsQuery, EventsResponse, ExportRequest,
        ExportResponse, HealthResponse, IntegrityResponse, IrResponse, RegistryListResponse,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dialectic_core::formats::{ir_checksum, ir_to_bytes};
use dialectic_core::primitives::DEFAULT_EVENT_HISTORY;
use dialectic_core::{CommandEnvelope, DialecticError, DialecticIR, corpus};

/// Events returned by `GET /events` when no limit is given.
const DEFAULT_EVENTS_LIMIT: usize = 50;

/// HTTP status for a core error.
pub fn status_for(error: &DialecticError) -> StatusCode {
    match error {
        e if e.is_validation() => StatusCode::BAD_REQUEST,
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        DialecticError::ModuleUnresolved { .. } => StatusCode::NOT_FOUND,
        DialecticError::AmbiguousRegistryId { .. } => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// COMMAND HANDLER
// =============================================================================

/// Execute one command envelope.
pub async fn command_handler(
    State(state): State<AppState>,
    Json(envelope): Json<CommandEnvelope>,
) -> impl IntoResponse {
    // Parse before taking the write lock; a malformed command never waits.
    let command = match envelope.command() {
        Ok(c) => c,
        Err(e) => {
            return (status_for(&e), Json(CommandResponse::error(e.to_string())));
        }
    };

    let mut engine = state.engine.write().await;
    match engine.execute(command, envelope.meta.as_ref()) {
        Ok(events) => (StatusCode::OK, Json(CommandResponse::success(events))),
        Err(e) => {
            tracing::warn!(kind = %envelope.kind, error = %e, "command failed");
            (status_for(&e), Json(CommandResponse::error(e.to_string())))
        }
    }
}

// =============================================================================
// ASPECT HANDLER
// =============================================================================

/// Read a stored aspect.
pub async fn aspect_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let engine = state.engine.read().await;
    match engine.get_aspect(&id) {
        Ok(Some(aspect)) => {
            let summary = aspect.summary();
            (
                StatusCode::OK,
                Json(AspectResponse::found(aspect.into_record(), summary)),
            )
        }
        Ok(None) => {
            let e = DialecticError::AspectNotFound(id);
            (status_for(&e), Json(AspectResponse::error(e.to_string())))
        }
        Err(e) => (status_for(&e), Json(AspectResponse::error(e.to_string()))),
    }
}

// =============================================================================
// REGISTRY HANDLERS
// =============================================================================

/// List every registry entry.
pub async fn registry_list_handler(State(state): State<AppState>) -> impl IntoResponse {
    let entries: Vec<_> = state.registry.entries().cloned().collect();
    Json(RegistryListResponse {
        count: entries.len(),
        entries,
    })
}

fn ir_result(
    state: &AppState,
    key: &str,
    loaded: Result<DialecticIR, DialecticError>,
) -> (StatusCode, Json<IrResponse>) {
    match (loaded, state.registry.meta(key)) {
        (Ok(ir), Some(entry)) => (StatusCode::OK, Json(IrResponse::success(entry.clone(), ir))),
        (Ok(_), None) => {
            let e = DialecticError::UnknownRegistryKey(key.to_string());
            (status_for(&e), Json(IrResponse::error(e.to_string())))
        }
        (Err(e), _) => {
            let status = status_for(&e);
            let keys = match &e {
                DialecticError::AmbiguousRegistryId { keys, .. } => keys.clone(),
                _ => Vec::new(),
            };
            (status, Json(IrResponse::error(e.to_string()).with_keys(keys)))
        }
    }
}

/// Load the aggregate behind a registry key (`module#export`, percent-encoded).
pub async fn registry_load_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let loaded = state.registry.load(&key);
    ir_result(&state, &key, loaded)
}

/// Load the aggregate behind a logical id; 409 when several keys carry it.
pub async fn registry_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let key = state
        .registry
        .keys_by_id(&id)
        .first()
        .cloned()
        .unwrap_or_default();
    let loaded = state.registry.load_by_id(&id);
    ir_result(&state, &key, loaded)
}

// =============================================================================
// EXPORT HANDLER
// =============================================================================

/// Export an aggregate as a base64 snapshot with its BLAKE3 checksum.
pub async fn export_handler(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> impl IntoResponse {
    let exported = state
        .registry
        .load(&request.key)
        .and_then(|ir| Ok((ir_to_bytes(&ir)?, ir_checksum(&ir)?)));

    match exported {
        Ok((data, checksum)) => (
            StatusCode::OK,
            Json(ExportResponse::success(&data, checksum)),
        ),
        Err(e) => (
            status_for(&e),
            Json(ExportResponse::error(format!("Export failed: {}", e))),
        ),
    }
}

// =============================================================================
// INTEGRITY HANDLER
// =============================================================================

/// Integrity report over the bundled chunks and operations.
pub async fn integrity_handler() -> Response {
    match corpus::integrity_report() {
        Ok(report) => Json(IntegrityResponse {
            clean: report.is_clean(),
            report,
        })
        .into_response(),
        Err(e) => (
            status_for(&e),
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

// =============================================================================
// EVENTS HANDLER
// =============================================================================

/// Most recent events on the engine's bus, oldest first.
pub async fn events_handler(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> impl IntoResponse {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_EVENTS_LIMIT)
        .min(DEFAULT_EVENT_HISTORY);
    let events = state.engine.read().await.event_bus().recent(limit);
    Json(EventsResponse {
        count: events.len(),
        events,
    })
}
