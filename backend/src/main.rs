//! Regional Weather Analytics - Backend Server
//!
//! Serves normalization, analytics and forecasting for observations from the
//! Middle, Lower and Upper regions.

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_backend::{create_app, services::Commands, AppError, AppState, Config, DataStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "wx_server=debug,weather_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Regional Weather Analytics Server");
    tracing::info!("Environment: {}", config.environment);

    // Open the record store
    let store = DataStore::open(&config.storage.data_dir).await?;

    // Initial load runs as its own task; wait for it before accepting requests
    let commands = Commands::new(store.clone(), config.forecast);
    let initial_load = tokio::spawn(async move { commands.load().await });
    match initial_load.await {
        Ok(outcome) => tracing::info!("Initial load: {}", outcome.status),
        Err(e) => tracing::error!("Initial load task failed: {}", e),
    }

    // Create application state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let host: std::net::IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| AppError::Configuration(format!("server.host '{}': {}", config.server.host, e)))?;
    let addr = SocketAddr::from((host, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
