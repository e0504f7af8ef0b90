// src/main.rs

use std::{error::Error, net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use weather_agent::{app, config, AppState};

// --- Constants ---
const CONFIG_FILE_PATH: &str = "bitte.dev.json";
const SERVER_PORT: u16 = 3000;

// --- Main Function ---
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt::init();

    let deployment_url = config::deployment_url();
    match &deployment_url {
        Some(url) => info!("Deployment URL fallback: {}", url),
        None => info!("No deployment URL in environment"),
    }

    let app_state = Arc::new(AppState {
        config_path: PathBuf::from(CONFIG_FILE_PATH),
        deployment_url,
    });

    let app_router = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], SERVER_PORT));
    info!("Starting weather agent plugin server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app_router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down successfully");
    Ok(())
}

// --- Graceful Shutdown Signal Handler ---
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Shutdown signal received...");
}
