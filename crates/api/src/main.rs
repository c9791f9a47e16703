use std::sync::Arc;

use anyhow::Context;

use userdesk_api::app::{build_app, services};
use userdesk_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    userdesk_observability::init();

    let config = ApiConfig::from_env();
    let services = Arc::new(services::build_services(config.seed));
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    let addr = listener.local_addr()?;

    tracing::info!("User Management API listening on http://{addr}");
    tracing::info!("API documentation available at http://localhost:{}/", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
