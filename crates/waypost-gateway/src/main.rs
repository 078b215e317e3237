use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use waypost_core::{ContentTypeRegistry, SettingsStore};
use waypost_gateway::cli::{SettingsBackendArg, CLI};
use waypost_gateway::registry::bootstrap_registry;
use waypost_gateway::{App, AppState};
use waypost_store::{InMemorySettingsStore, JsonFileSettingsStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;
    let registry = bootstrap_registry(config.content_types.as_deref())?;

    info!(
        listen_addr = %config.listen_addr,
        settings_backend = %config.settings,
        registered_types = registry.iter().count(),
        "starting waypost gateway"
    );

    match config.settings {
        SettingsBackendArg::InMemory => {
            run_server(config.listen_addr, InMemorySettingsStore::new(), registry).await
        }
        SettingsBackendArg::File => {
            let path = config
                .settings_path
                .context("settings path is required when the settings backend is file")?;
            run_server(
                config.listen_addr,
                JsonFileSettingsStore::new(path),
                registry,
            )
            .await
        }
    }
}

async fn run_server<S: SettingsStore>(
    listen_addr: SocketAddr,
    store: S,
    registry: ContentTypeRegistry,
) -> anyhow::Result<()> {
    let state = AppState::from_store(Arc::new(store), Arc::new(registry));

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state)).await?;
    Ok(())
}
