//! HTTP server for the work-time engine.
//!
//! Reads `WORKTIME_CONFIG_DIR` (default `./config`) and `WORKTIME_BIND_ADDR`
//! (default `127.0.0.1:8080`). Log output is filtered through `RUST_LOG`.

use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use worktime_engine::api::{AppState, create_router};
use worktime_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_line_number(true)
        .init();

    let config_dir = env::var("WORKTIME_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("WORKTIME_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        currency = %config.pay().currency,
        hourly_rate = %config.pay().default_hourly_rate,
        monthly_hour_limit = config.pay().monthly_hour_limit,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(address = %bind_addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
