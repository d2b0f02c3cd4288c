//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{analyze_menu_handler, available_days_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub server_deps: ServerDeps,
}

/// CORS for the configured frontend origins. Unparseable origins are skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the Axum application router
pub fn build_app(server_deps: ServerDeps, allowed_origins: &[String]) -> Router {
    let app_state = AxumAppState { server_deps };

    Router::new()
        .route("/available-days", get(available_days_handler))
        .route("/analyze-menu", post(analyze_menu_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
