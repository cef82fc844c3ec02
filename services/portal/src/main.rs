//! Athletics intranet portal entry point.
//!
//! # Purpose
//! Wires configuration, observability, and the directory store, then serves
//! the pages and API alongside a separate metrics listener.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
use anyhow::Context;
use portal::app::{AppState, build_router};
use portal::config::{PortalConfig, StorageBackend};
use portal::observability;
use portal::store::DirectoryStore;
use portal::store::memory::InMemoryStore;
use portal::store::postgres::PostgresStore;
use std::future::Future;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = PortalConfig::from_env_or_yaml().context("portal config")?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: PortalConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("ica-portal")?;
    let state = build_state(&config).await?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state.clone());
    let addr = config.bind_addr;
    tracing::info!(
        %addr,
        chrome = %state.chrome_version,
        storage = state.store.backend_name(),
        "portal listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

async fn build_state(config: &PortalConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn DirectoryStore> = match config.storage {
        StorageBackend::Memory => match &config.seed_path {
            Some(path) => Arc::new(InMemoryStore::from_seed_file(path)?),
            None => {
                tracing::warn!("memory storage without a seed; every user is unregistered");
                Arc::new(InMemoryStore::new())
            }
        },
        StorageBackend::Postgres => {
            let pg = config
                .postgres
                .as_ref()
                .context("postgres configuration missing")?;
            Arc::new(PostgresStore::connect(pg).await?)
        }
    };

    Ok(AppState {
        site: config.site.clone(),
        chrome_version: config.chrome_version,
        identity_header: config.identity_header.clone(),
        store,
    })
}
