use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod chat;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod report;
mod review;
mod routes;
mod session;
mod state;

use catalog::Catalog;
use config::Config;
use llm_client::{Advisor, LlmClient};
use session::SessionStore;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting counseling API on port {}", config.port);

    let catalog = Arc::new(Catalog::load(&config.catalog_path)?);
    let advisor: Arc<dyn Advisor> = Arc::new(LlmClient::new(config.openrouter_api_key.clone()));
    let sessions = SessionStore::default();

    let state = AppState {
        catalog,
        advisor,
        sessions,
    };

    let app = routes::build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Listening on {addr}");
    axum::serve(listener, app)
        .await
        .context("Server exited unexpectedly")?;

    Ok(())
}
