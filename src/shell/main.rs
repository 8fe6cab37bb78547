use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use calendar_events::modules::calendar::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use calendar_events::shell::config::Config;
use calendar_events::shell::http::router;
use calendar_events::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env before the subscriber so RUST_LOG can come from there too.
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let event_store = Arc::new(InMemoryEventStore::new());
    let app = router(AppState::new(event_store));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("calendar API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
