//! Phone Verification Relay - Entry point.

use phone_email_client::PhoneEmailClient;
use secrecy::ExposeSecret;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use verify_relay::{
    api::{create_router, AppState},
    config::RelayConfig,
};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match RelayConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
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

    info!("Starting phone verification relay");

    if !config.secret_configured() {
        warn!("Client secret is the development placeholder, upstream fetches will be rejected");
    }

    // Initialize Phone.Email client
    let client = match PhoneEmailClient::new(
        config.upstream.client_secret.expose_secret().as_str(),
        config.upstream.timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create Phone.Email client: {}", e);
            std::process::exit(1);
        }
    };

    // Create application state and router
    let state = AppState::new(config.clone(), client);
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
