use std::sync::Arc;

use anyhow::Context;

use eventcal_api::app::{self, services::AppServices};
use eventcal_infra::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    eventcal_observability::init();

    let config = ServerConfig::from_env().context("failed to load server configuration")?;
    let services = Arc::new(AppServices::new());
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
