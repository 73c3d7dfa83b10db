//! net-pay-engine server
//!
//! Loads the deduction scheme and serves the calculation API.
//!
//! Environment:
//! - `NET_PAY_CONFIG` — scheme configuration directory (default `./config/hu_2025`)
//! - `NET_PAY_ADDR` — listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG` — log filter (default `net_pay_engine=info`)

use net_pay_engine::api::{AppState, create_router};
use net_pay_engine::config::ConfigLoader;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_CONFIG_DIR: &str = "./config/hu_2025";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "net_pay_engine=info".into()),
        )
        .init();

    let config_dir =
        std::env::var("NET_PAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("NET_PAY_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    tracing::info!(
        "Using scheme {} ({}) from {config_dir}",
        config.scheme().code,
        config.scheme().name
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("net-pay-engine listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
