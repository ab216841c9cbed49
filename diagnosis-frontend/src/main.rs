use diagnosis_frontend::config::FrontendConfig;
use diagnosis_frontend::services::init_metrics;
use diagnosis_frontend::startup::Application;
use dotenvy::dotenv;
use service_core::observability::logging::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = FrontendConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "diagnosis-frontend",
        &configuration.common.log_level,
        configuration.common.otlp_endpoint.as_deref(),
    )?;

    init_metrics()?;

    let application = Application::build(configuration).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    info!("Starting diagnosis-frontend on port {}", application.port());
    application.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
