//! BodySense AI Backend
//!
//! Serves simulated wearable readings and mock care data to the dashboard.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: metrics source and mock catalog
//! - State: read-only config and the injected metrics source

use anyhow::Result;
use bodysense_backend::{config::AppConfig, routes, state::AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    init_tracing(config.debug);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %AppConfig::environment(),
        debug = config.debug,
        seed = ?config.simulation.seed,
        "Starting BodySense AI Backend"
    );

    let addr = config.bind_address();

    // Create application state
    let state = AppState::new(config);

    // Build application
    let app = routes::create_router(state);

    // Start server
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(debug: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            "bodysense_backend=debug,tower_http=debug".into()
        } else {
            "bodysense_backend=info,tower_http=info".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if debug {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    } else {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
