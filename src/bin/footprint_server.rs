// Server Binary Entry Point
//
// Purpose: Start the Axum quiz server
// Usage: cargo run --bin footprint_server

use footprint_2050::{create_router, AppConfig, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    dotenv::dotenv().ok();

    // RUST_LOG overrides; otherwise quiz logs at info and request traces at debug
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "footprint_2050=info,tower_http=debug,axum=debug,warn".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting quiz server...");

    // Configuration from environment variables, read once
    let config = AppConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  STATIC_DIR: {}", config.static_dir);
    tracing::info!("  Text generation: {}", if config.text_generation.is_some() { "enabled" } else { "disabled" });
    tracing::info!("  Carbon API: {}", if config.carbon_api.is_some() { "enabled" } else { "disabled" });

    let state = AppState::new(&config)?;

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
