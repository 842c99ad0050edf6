mod config;
mod routes;

use std::net::SocketAddr;

use config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid host configuration"))?;

    let app = routes::app(&config.site_dir);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "portfolio host listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
