use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monopoly_arena_core::agents::adapters::http::HttpAgentConfig;
use monopoly_arena_core::{api, config::Config, orchestrator::Registry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "monopoly_arena_core=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Every game lives in-memory for the lifetime of the process (spec
    // §6.3: no persistence in the core); the registry spawns one
    // orchestrator task per game as control requests create them.
    let registry = Arc::new(match &config.llm_endpoint {
        Some(endpoint) => Registry::with_http_config(HttpAgentConfig {
            endpoint: endpoint.clone(),
            api_key: config.llm_api_key.clone().unwrap_or_default(),
            request_timeout: std::time::Duration::from_secs(25),
        }),
        None => Registry::new(),
    });

    // Build application state
    let app_state = api::AppState { registry };

    // Build router
    let app = Router::new()
        .merge(api::routes())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("monopoly arena core starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
