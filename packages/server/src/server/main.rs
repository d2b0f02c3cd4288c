// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use menu_core::domains::menu::store::MenuStore;
use menu_core::kernel::{GeminiAI, ServerDeps};
use menu_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,menu_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Dining Menu Advisor API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        menu_csv = %config.menu_csv_path.display(),
        model = %config.gemini_model,
        "Configuration loaded"
    );

    if !config.menu_csv_path.exists() {
        tracing::warn!(
            path = %config.menu_csv_path.display(),
            "Menu CSV not found yet; run extract_menu before querying"
        );
    }

    let server_deps = ServerDeps::new(
        Arc::new(GeminiAI::new(config.gemini_api_key.clone(), config.gemini_model.clone())),
        MenuStore::new(config.menu_csv_path.clone()),
    );

    // Build application
    let app = build_app(server_deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
