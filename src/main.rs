#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let leptos_conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;

    let app = routes::app(leptos_conf.leptos_options, &config);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, compression = config.compression, "adfunnel listening");
    axum::serve(listener, app).await?;
    Ok(())
}
