mod admin;
mod config;
mod cv;
mod db;
mod errors;
mod models;
mod preview;
mod routes;
mod state;
mod style;
mod templates;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::admin::store::PgProfileStore;
use crate::config::Config;
use crate::cv::store::PgCvStore;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::templates::TemplateRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV builder API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs pending migrations)
    let db = create_pool(&config.database_url, config.database_max_connections).await?;

    let templates = TemplateRegistry::builtin().context("Failed to build template registry")?;
    info!(
        "Template registry ready: {} templates, default '{}'",
        templates.list().len(),
        templates.default_template().id()
    );

    let state = AppState {
        documents: Arc::new(PgCvStore::new(db.clone())),
        profiles: Arc::new(PgProfileStore::new(db)),
        templates: Arc::new(templates),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restricts CORS to `CORS_ALLOWED_ORIGIN` when set, permissive otherwise.
fn cors_layer(config: &Config) -> Result<CorsLayer> {
    match &config.cors_allowed_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin.trim())
                .context("CORS_ALLOWED_ORIGIN is not a valid header value")?;
            Ok(CorsLayer::new()
                .allow_origin(AllowOrigin::exact(origin))
                .allow_methods(Any)
                .allow_headers(Any))
        }
        None => Ok(CorsLayer::permissive()),
    }
}
