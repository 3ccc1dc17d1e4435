mod config;
mod error;
mod handlers;
mod routes;
mod state;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use routes::{cors_layer, site::site_routes};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config)?;

    let cors = cors_layer(&config)?;

    let app = site_routes(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!("SitePeek API listening on http://{}", config.addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
