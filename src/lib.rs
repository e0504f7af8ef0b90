// src/lib.rs

use axum::{routing::get, Router};
use std::{path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod manifest;
pub mod time;

// --- Shared Application State ---
// Read-only after startup; handlers are stateless and reentrant.
pub struct AppState {
    pub config_path: PathBuf,
    pub deployment_url: Option<String>,
}

/// Builds the router for the plugin service: the manifest endpoint, the time
/// endpoint, request tracing, and permissive CORS.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/ai-plugin", get(manifest::get_manifest))
        .route("/api/time", get(time::get_time))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
