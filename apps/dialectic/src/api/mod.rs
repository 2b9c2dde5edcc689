//! # Dialectic HTTP API Module
//!
//! ## Endpoints
//!
//! - `POST /command` - Execute a `{kind, payload, meta}` envelope
//! - `GET /aspects/{id}` - Stored aspect with its summary
//! - `GET /registry` - Registry entries
//! - `GET /registry/{key}` - Aggregate behind a key (percent-encoded)
//! - `GET /registry/id/{id}` - Aggregate behind a logical id
//! - `POST /registry/export` - Base64 snapshot and BLAKE3 checksum
//! - `GET /integrity` - Integrity report of the bundled content
//! - `GET /events?limit=N` - Recent events
//! - `GET /health` - Health check
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `DIALECTIC_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `DIALECTIC_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)
//! - `DIALECTIC_API_KEY`: If set, requires Bearer token authentication

mod auth;
mod handlers;
mod middleware;
mod types;

pub use auth::{API_KEY_ENV, get_api_key_from_env};
pub use handlers::status_for;
pub use middleware::{RATE_LIMIT_ENV, create_rate_limiter, get_rate_limit_from_env};
pub use types::{
    AspectResponse, CommandResponse, EventsQuery, EventsResponse, ExportRequest, ExportResponse,
    HealthResponse, IntegrityResponse, IrResponse, RegistryListResponse,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use dialectic_core::{AspectBackend, AspectEngine, DialecticError, IrRegistry};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const CORS_ORIGINS_ENV: &str = "DIALECTIC_CORS_ORIGINS";

/// Request body cap.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Engine behind a lock (commands take `&mut`), registry shared read-only.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<AspectEngine<AspectBackend>>>,
    pub registry: Arc<IrRegistry>,
}

impl AppState {
    #[must_use]
    pub fn new(engine: AspectEngine<AspectBackend>, registry: IrRegistry) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
            registry: Arc::new(registry),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// CORS layer from `DIALECTIC_CORS_ORIGINS`.
///
/// `*` allows every origin, a comma-separated list allows those origins, and
/// an unset or entirely invalid value allows localhost only.
fn build_cors_layer() -> CorsLayer {
    match std::env::var(CORS_ORIGINS_ENV).ok().as_deref() {
        Some("*") => {
            tracing::warn!(
                "CORS: Allowing ALL origins ({}=*). This is insecure for production!",
                CORS_ORIGINS_ENV
            );
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| match s.parse::<HeaderValue>() {
                    Ok(hv) => {
                        tracing::info!("CORS: Allowing origin: {}", s);
                        Some(hv)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", s, e);
                        None
                    }
                })
                .collect();

            if allowed.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in {}, defaulting to localhost only",
                    CORS_ORIGINS_ENV
                );
                restricted_cors(localhost_origins())
            } else {
                restricted_cors(allowed)
            }
        }
        None => {
            tracing::info!(
                "CORS: No {} set, defaulting to localhost only",
                CORS_ORIGINS_ENV
            );
            restricted_cors(localhost_origins())
        }
    }
}

fn localhost_origins() -> Vec<HeaderValue> {
    [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .map(HeaderValue::from_static)
    .collect()
}

fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting (if enabled)
/// 5. Authentication (if configured)
pub fn create_router(state: AppState) -> Router {
    let rate_limit = get_rate_limit_from_env();
    let rate_limiter = if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        Some(create_rate_limiter(rate_limit))
    } else {
        tracing::info!("Rate limiting disabled");
        None
    };

    let has_auth = get_api_key_from_env().is_some();
    if has_auth {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!(
            "API key authentication DISABLED - all endpoints are publicly accessible! \
             Set {} to enable authentication.",
            API_KEY_ENV
        );
    }

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/command", post(handlers::command_handler))
        .route("/aspects/{id}", get(handlers::aspect_handler))
        .route("/registry", get(handlers::registry_list_handler))
        .route("/registry/export", post(handlers::export_handler))
        .route("/registry/id/{id}", get(handlers::registry_by_id_handler))
        .route("/registry/{key}", get(handlers::registry_load_handler))
        .route("/integrity", get(handlers::integrity_handler))
        .route("/events", get(handlers::events_handler));

    if has_auth {
        router = router.layer(axum_middleware::from_fn(auth::api_key_auth_middleware));
    }

    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Serve until Ctrl+C.
pub async fn run_server(
    addr: &str,
    engine: AspectEngine<AspectBackend>,
    registry: IrRegistry,
) -> Result<(), DialecticError> {
    let router = create_router(AppState::new(engine, registry));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| DialecticError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Dialectic HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DialecticError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
