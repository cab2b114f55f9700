#![recursion_limit = "256"]

mod config;
mod error;
mod proxy;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::proxy::ProxyState;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "laptrack-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let state = ProxyState::new(&config)?;
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, backend = %config.backend_url, "laptrack-server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
