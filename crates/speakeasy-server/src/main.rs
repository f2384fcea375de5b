//! Speakeasy Server - generates a spoken quip and serves it to the browser

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod error;
mod state;

use speakeasy_core::{AppConfig, Pipeline};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "speakeasy_server=debug,speakeasy_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Speakeasy Server");

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            warn!("Failed to read .env: {}", e);
        }
    }

    // Load configuration
    let config = AppConfig::load()?;
    config.log_summary();

    let pipeline = Pipeline::from_config(&config)?;
    let state = AppState::new(pipeline);

    // Build router
    let app = api::create_router(state, &config.server);

    // Start server
    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
