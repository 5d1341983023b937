mod config;
mod errors;
mod generation;
mod models;
mod parsing;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Escaping user text: {}, body limit: {} bytes",
        config.escape_user_text, config.max_body_bytes
    );
    if !config.escape_user_text {
        tracing::warn!("ESCAPE_USER_TEXT is off: user input is interpolated into HTML verbatim");
    }

    let cors = build_cors_layer(&config)?;
    let state = AppState::new(config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restricts CORS to the configured form origin, or stays permissive when unset.
fn build_cors_layer(config: &Config) -> Result<CorsLayer> {
    let Some(origin) = config.cors_allow_origin.as_deref() else {
        return Ok(CorsLayer::permissive());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .with_context(|| format!("CORS_ALLOW_ORIGIN '{origin}' is not a valid header value"))?;
    info!("CORS restricted to {:?}", origin);

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
