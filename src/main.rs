//! logdeck server binary

use anyhow::Context;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logdeck::{create_router, AppState, Config, LogStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    init_tracing(config.log_json || config.is_production());

    tracing::info!("logdeck starting...");
    tracing::info!(
        environment = %config.environment,
        offset_minutes = config.display_offset_minutes,
        "Configuration loaded"
    );

    let store = LogStore::load(&config, chrono::Utc::now())
        .context("failed to load log collection")?;
    tracing::info!(
        records = store.records().len(),
        security_events = store.security_events().len(),
        "Log collection ready"
    );

    let state = AppState::new(store, config.clone());
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "logdeck=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
