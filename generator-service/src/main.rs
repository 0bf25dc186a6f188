use blurb_core::observability::init_tracing;
use generator_service::config::GeneratorConfig;
use generator_service::startup::Application;

#[tokio::main]
async fn main() -> Result<(), blurb_core::error::AppError> {
    init_tracing("generator-service", "info");

    // Load configuration - fail fast if the API key is missing
    let config = GeneratorConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting generator service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
