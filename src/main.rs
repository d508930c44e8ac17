use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use food_info_api::app::build_router;
use food_info_api::config::Config;
use food_info_api::handlers::AppState;
use food_info_api::usda_client::UsdaClient;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, builds the USDA client and
/// serves the HTTP API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_info_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let usda_client = UsdaClient::new(&config)?;
    tracing::info!("✓ USDA client initialized: {}", config.usda_base_url);

    let app_state = Arc::new(AppState { usda_client });

    let app = build_router(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("API docs available at http://localhost:{}/docs", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
