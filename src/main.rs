use anyhow::{Context, Result};
use std::sync::Arc;

mod api;
mod config;
mod models;
mod services;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    utils::init_tracing();

    let config = config::Config::from_env()?;
    let shared_state = Arc::new(models::AppState::new());
    let app = api::router(shared_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!("🚀 Servidor backend corriendo en http://localhost:{}", config.port);
    tracing::info!("📋 Sistema de Gestión de Citas para Mecánica de Motos");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
