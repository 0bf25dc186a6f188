use blurb_core::observability::init_tracing;
use store_service::config::StoreConfig;
use store_service::startup::Application;

#[tokio::main]
async fn main() -> Result<(), blurb_core::error::AppError> {
    init_tracing("store-service", "info");

    let config = StoreConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting store service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
