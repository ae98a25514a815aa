//! HTTP API for the profile registry.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::config::Config;
use crate::registry::Registry;
use axum::{middleware as axum_middleware, routing::get, Router};
use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// Header carrying the client id half of a device identity.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Device registry; every store operation runs under this lock
    pub registry: Arc<RwLock<Registry>>,
    /// Shared secret expected in the `Authorization` header
    pub token: SecretString,
    /// Reject undecodable profile bodies instead of treating them as empty
    pub strict_body: bool,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: Registry, token: impl Into<String>, strict_body: bool) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            token: SecretString::new(token.into()),
            strict_body,
        }
    }

    /// Create application state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Registry::new(),
            config.auth.token.clone(),
            config.registry.strict_body,
        )
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/profiles", get(handlers::list_profiles))
        .route(
            "/profiles/:mac",
            get(handlers::get_profile)
                .post(handlers::create_profile)
                .put(handlers::update_profile)
                .delete(handlers::delete_profile),
        )
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
