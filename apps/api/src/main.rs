mod company;
mod config;
mod errors;
mod essays;
mod industry;
mod interview;
mod llm_client;
mod personality;
mod routes;
mod state;
mod workflow;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

const SESSION_SWEEP_SECS: u64 = 60;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Shukatsu API v{}", env!("CARGO_PKG_VERSION"));

    // Model gateway (fails fast when the provider's key is missing)
    let gateway = llm_client::connect(&config)?;

    let state = AppState::new(gateway, config.clone());

    // Drop idle workflow sessions in the background
    state
        .sessions
        .spawn_sweeper(std::time::Duration::from_secs(SESSION_SWEEP_SECS));

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the front end has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
