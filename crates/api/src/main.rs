use std::sync::Arc;

use anyhow::Context;

use gildedrose_api::app::{self, services};
use gildedrose_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    gildedrose_observability::init(config.log_format);

    let inventory = services::initial_inventory(&config.inventory_file);
    let inventory_service = services::build_services(inventory, config.import_dir.clone());
    let app = app::build_app(Arc::new(inventory_service));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
