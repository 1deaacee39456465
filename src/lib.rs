//! logdeck - admin console log service
//!
//! Serves the activity and security logs behind the admin dashboard from an
//! in-memory collection.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        LOGDECK                           │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌────────────────────────────────────┐ │
//! │  │  API       │──►│  Log query pipeline                │ │
//! │  │  (Axum)    │   │  category ─► search ─► day groups  │ │
//! │  └─────┬──────┘   └────────────────────────────────────┘ │
//! │        ▼                                                 │
//! │  ┌────────────┐                                          │
//! │  │  LogStore  │  seed data or JSON file, read-only       │
//! │  └────────────┘                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;
pub mod seed;
pub mod store;

use axum::{Router, routing::get};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use config::Config;
pub use error::{AppError, AppResult, StoreError};
pub use store::LogStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: LogStore,
    pub config: Config,
}

impl AppState {
    pub fn new(store: LogStore, config: Config) -> Self {
        Self { store, config }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/v1/logs", get(handlers::logs::list))
        .route("/api/v1/security/events", get(handlers::security::list))
        .route("/api/v1/dashboard", get(handlers::dashboard::overview));

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
