use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod state;

use sop_portal::catalog::Catalog;
use sop_portal::config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sop_portal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    let app_config = config::load_config()?;
    tracing::info!("Server will listen on {}:{}", app_config.server.host, app_config.server.port);

    // Load catalog / 加载目录
    let catalog = match app_config.get_catalog_path() {
        Some(path) => Catalog::load(&path).with_context(|| format!("Failed to load catalog {:?}", path))?,
        None => Catalog::builtin().context("Failed to load embedded catalog")?,
    };
    let stats = catalog.stats();
    tracing::info!(
        "Catalog ready: {} ({} departments, {} SOPs, {} with documents)",
        catalog.organization(),
        stats.total_departments,
        stats.total_sops,
        stats.documented_sops
    );

    let docs_dir = app_config.get_docs_dir();
    if !docs_dir.is_dir() {
        tracing::warn!("Documents directory {:?} does not exist, downloads will answer 404", docs_dir);
    } else {
        tracing::info!("Serving documents from {:?}", docs_dir);
    }

    let state = Arc::new(AppState::new(Arc::new(catalog), &app_config));
    let app = api::router(state);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
