//! Per-day service billing.
//!
//! `pricing` holds the engine and its HTTP routes; `config` and `error` are
//! the ambient pieces the binary wires together.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod pricing;

use config::ServerConfig;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    pricing::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
