use eventos_portal::{
    AppState,
    config::{AppConfig, Env},
    create_router,
    guard::{HttpSessionProbe, ProbeState},
    routes::app_routes,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point for the portal, responsible for initializing
/// all core components: configuration, logging, the route table, the session
/// probe, and the HTTP server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (fail-fast)
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes RUST_LOG, falling back to sensible defaults for local use.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "eventos_portal=debug,tower_http=info,axum=trace".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: pretty output for human readability.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON output for ingestion by centralized log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Portal starting in {:?} mode", config.env);

    // 4. Route Table
    // Built once; immutable for the lifetime of the process.
    let table = Arc::new(app_routes());

    // 5. Session Probe
    // The guard's only external dependency: the backend session endpoint.
    let probe = Arc::new(HttpSessionProbe::new(&config.backend_url)) as ProbeState;
    tracing::info!("Session checks target {}/api/", config.backend_url);

    // 6. Unified State Assembly
    let app_state = AppState {
        config,
        table,
        probe,
    };

    // 7. Router and Server Startup
    let app = create_router(app_state);

    let listener = TcpListener::bind("0.0.0.0:3000").await.unwrap();

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on 0.0.0.0:3000");

    axum::serve(listener, app).await.unwrap();
}
