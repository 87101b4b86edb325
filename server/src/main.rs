mod config;
mod routes;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

use client::routes::RouteTableError;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("route table: {0}")]
    Routes(#[from] RouteTableError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = ServerConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid server config"))?;
    let leptos = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;

    let app = routes::app(leptos.leptos_options).inspect_err(|e| tracing::error!(error = %e, "invalid route table"))?;
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    tracing::info!(addr = %config.addr(), base = client::routes::BASE_PATH, "motion gallery listening");
    axum::serve(listener, app).await?;
    Ok(())
}
