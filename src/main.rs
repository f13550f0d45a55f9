//! Clientele server binary
//!
//! Reads the service configuration (path in `CLIENTELE_CONFIG`, defaults
//! otherwise) and serves the client REST surface.

use anyhow::Result;
use clientele::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("CLIENTELE_CONFIG") {
        Ok(path) => ServiceConfig::from_yaml_file(&path)?,
        Err(_) => ServiceConfig::default_config(),
    };

    let service = Arc::new(InMemoryClientService::new());
    let state = AppState::new(service);

    let mut shell = AppShell::new().with_group("/clients", build_client_routes(state));
    if let Some(dir) = &config.server.static_dir {
        shell = shell.with_static_dir(dir);
    }

    shell.serve(&config.server.bind_addr).await
}
