mod config;
mod db;
mod editor;
mod errors;
mod export;
mod layout;
mod models;
mod routes;
mod state;
mod store;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::layout::a4_page_config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{ResumeStore, SqliteStorage};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    // Local storage; an unreadable database aborts startup.
    let pool = create_pool(&config.storage_url).await?;
    let storage = SqliteStorage::new(pool).await?;
    let store = ResumeStore::load(Arc::new(storage), config.storage_key.clone()).await?;
    info!(
        "Resume loaded (template: {})",
        store.snapshot().resume.selected_template
    );

    let page_config = a4_page_config();
    info!(
        "Export page: {}x{} px, scale {}",
        page_config.page_width_px, page_config.page_height_px, config.export_scale
    );

    let state = AppState {
        store: Arc::new(store),
        config: config.clone(),
        page_config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    if !addr.ip().is_loopback() {
        anyhow::bail!("HOST must be a loopback address, got {}", addr.ip());
    }
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
