//! HTTP server for the Shift Pay Engine.
//!
//! Environment:
//! - `SHIFT_PAY_CONFIG`: configuration directory (default `./config/default`)
//! - `SHIFT_PAY_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter

use tracing::{error, info};

use shift_pay_engine::api::{AppState, create_router};
use shift_pay_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shift_pay_engine=info".parse()?),
        )
        .init();

    info!("Shift Pay Engine v{}", env!("CARGO_PKG_VERSION"));

    let config_dir =
        std::env::var("SHIFT_PAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("SHIFT_PAY_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir).inspect_err(|e| {
        error!(config_dir = %config_dir, error = %e, "Failed to load configuration");
    })?;
    info!(
        config_dir = %config_dir,
        name = %config.engine().name,
        base_rate = %config.rates().base_rate(),
        special_days = config.calendar().len(),
        time_zone = ?config.engine().time_zone,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await.inspect_err(|e| {
        error!(addr = %addr, error = %e, "Failed to bind listener");
    })?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
