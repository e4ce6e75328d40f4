//! Service entry-point: wires configuration, adapters, and the HTTP listener.

use backend::server::{AppConfig, create_server};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let server = create_server(config).await?;
    server.await
}
