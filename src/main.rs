use anyhow::{Context, Result};
use childcare_calculator::api::{AppState, create_router};
use childcare_calculator::config::ConfigLoader;
use tracing::info;

const DEFAULT_CONFIG_DIR: &str = "./config/household";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_dir =
        std::env::var("CHILDCARE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir))?;

    let bind_address = config.bind_address().to_string();
    info!(
        service = %config.service().name,
        version = %config.service().version,
        config_dir = %config_dir,
        "Starting household childcare calculator"
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("binding {}", bind_address))?;
    info!(address = %bind_address, "Listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
