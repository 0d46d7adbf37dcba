use axum::{
    Router,
    extract::FromRef,
    http::HeaderName,
    routing::get,
};
use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod config;
pub mod guard;
pub mod handlers;
pub mod views;

// Route table machinery and the concrete application table.
pub mod routes;

// --- Public Re-exports ---

// Makes core state types easily accessible to the application entry point
// (main.rs) and to integration tests.
pub use config::AppConfig;
pub use guard::{HttpSessionProbe, MockSessionProbe, ProbeState, SessionProbe};
pub use routes::{RouteTable, app_routes};

/// AppState
///
/// The single, thread-safe, immutable container holding everything a
/// navigation needs: the configuration, the route table, and the session
/// probe. Shared across all incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Configuration: the loaded, immutable environment configuration.
    pub config: AppConfig,
    /// The ordered route table, built once at startup.
    pub table: Arc<RouteTable>,
    /// The guard's session-check dependency (HTTP in production, mock in tests).
    pub probe: ProbeState,
}

// --- Axum FromRef Extractor Implementations ---

// Allow handlers to selectively pull components from the shared AppState.

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for Arc<RouteTable> {
    fn from_ref(app_state: &AppState) -> Arc<RouteTable> {
        app_state.table.clone()
    }
}

impl FromRef<AppState> for ProbeState {
    fn from_ref(app_state: &AppState) -> ProbeState {
        app_state.probe.clone()
    }
}

/// create_router
///
/// Assembles the portal's routing structure, applies global middleware, and
/// registers the application state.
///
/// The route table itself is not expanded into individual axum routes: table
/// resolution is ordered and first-match-wins, so every navigation goes
/// through the single fallback handler, which consults the table and the
/// guard. Only infrastructure endpoints are registered directly.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // GET /health
        // Unauthenticated liveness endpoint for monitoring and load balancers.
        .route("/health", get(|| async { "ok" }))
        // Every other path is a navigation: route table + guard.
        .fallback(handlers::navigate)
        .with_state(state);

    // 3. Observability and Correlation Layers (applied outermost)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID generation: a unique UUID per incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request tracing: wraps the request/response lifecycle in
                // a span carrying the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID propagation back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS layer (applied last).
        .layer(cors)
}

/// trace_span_logger
///
/// Helper used by `TraceLayer` to customize span creation. Extracts the
/// `x-request-id` header (if present) and includes it in the structured
/// logging metadata alongside the HTTP method and URI, so every log line for
/// a single navigation is correlated by a unique ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
