//! HTTP API for the verification relay.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::config::RelayConfig;
use axum::{
    http::{header, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use phone_email_client::PhoneEmailClient;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration, fixed at startup
    pub config: Arc<RelayConfig>,
    /// Phone.Email profile client
    pub client: Arc<PhoneEmailClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: RelayConfig, client: PhoneEmailClient) -> Self {
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    // The widget posting to /verify runs on arbitrary customer origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::root))
        .route("/verify", post(handlers::verify))
        .route("/health", get(handlers::health))
        // Debug endpoints
        .route("/test", post(handlers::test_echo))
        .route("/test-mock", get(handlers::test_mock))
        .layer(cors)
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
