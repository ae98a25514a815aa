//! Device Profile Registry - Entry point.

use profile_registry::{
    api::{create_router, AppState},
    config::Config,
};
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Device Profile Registry");

    if config.registry.strict_body {
        info!("Strict body decoding enabled, malformed profiles are rejected");
    }

    let state = AppState::from_config(&config);
    let app = create_router(state);

    let ip = match config.server.listen_addr.parse::<IpAddr>() {
        Ok(ip) => ip,
        Err(e) => {
            warn!(
                "Invalid listen address {:?} ({}), falling back to 0.0.0.0",
                config.server.listen_addr, e
            );
            [0, 0, 0, 0].into()
        }
    };
    let addr = SocketAddr::new(ip, config.server.port);

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
