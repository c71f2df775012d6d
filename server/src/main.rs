mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "userdesk stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options, config.client_config());
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, api_url = %config.api_url, "userdesk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
