//! Order service binary
//!
//! Reads a YAML config from the first argument or `ORDERS_CONFIG`, falling
//! back to defaults (in-memory store on 127.0.0.1:3000).

use anyhow::Result;
use orders::config::ServiceConfig;
use orders::server::ServerBuilder;
use orders::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ORDERS_CONFIG").ok());

    let config = match &path {
        Some(path) => ServiceConfig::from_yaml_file(path)?,
        None => ServiceConfig::default(),
    };

    init_tracing(&config.logging)?;
    tracing::info!(
        config = path.as_deref().unwrap_or("<defaults>"),
        ids = ?config.ids,
        backend = ?config.storage.backend,
        "starting orders-rs"
    );

    ServerBuilder::new()
        .with_config(config)
        .with_configured_store()
        .await?
        .serve()
        .await
}
