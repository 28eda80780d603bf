mod config;
mod errors;
mod finder;
mod key_pool;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::key_pool::KeyPool;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Game Finder v{}", env!("CARGO_PKG_VERSION"));

    let keys = KeyPool::new(config.gemini_api_keys.clone());
    // The server still starts without keys; /find_games reports the problem per request.
    if keys.is_empty() {
        error!("GEMINI_API_KEYS not found or empty; every /find_games request will fail");
    } else {
        info!("Loaded {} Gemini API key(s)", keys.len());
    }

    let generator = Arc::new(GeminiClient::new());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    info!("Serving front-end from {}", config.static_dir.display());

    let state = AppState {
        keys,
        generator,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = bind_listener(&config.host, config.port).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Binds the HTTP listener. `host` may be a hostname or a bare IPv4/IPv6 address.
async fn bind_listener(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))
}
