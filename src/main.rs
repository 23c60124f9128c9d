mod models;
mod handlers;
mod routes;
mod docs;
mod config;
mod error;
mod extract;

use config::Config;
use routes::create_app;
use tracing::{info, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use std::panic;

#[tokio::main]
async fn main() {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Load configuration
    let config_result = Config::load();
    let config = config_result.as_ref().cloned().unwrap_or_default();

    // Initialize tracing
    let pretty = config.is_development();
    tracing_subscriber::registry()
        .with(pretty.then(|| fmt::layer().pretty()))
        .with((!pretty).then(fmt::layer))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to the configured level, but allow debug for our app
            format!("items_api=debug,tower_http=debug,axum::rejection=trace,{}", config.log_level).into()
        }))
        .init();

    info!("Starting server...");
    match &config_result {
        Ok(_) => info!("✅ Configuration loaded successfully"),
        Err(e) => {
            error!("❌ Failed to load configuration: {}", e);
            warn!("Using default configuration");
        }
    }

    let app = create_app(&config);

    let listener = match tokio::net::TcpListener::bind(config.server_address()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", config.server_address(), e);
            std::process::exit(1);
        }
    };

    info!("🚀 Server running on http://{} ({})", config.server_address(), config.environment);
    info!("📚 Swagger UI available at http://{}/docs", config.server_address());
    info!("📖 ReDoc available at http://{}/redoc", config.server_address());

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
