use anyhow::{Context, Result};
use frontend::{config::Config, handler::AppRouter, state::AppState};
use shared::{
    config::env_flag,
    utils::{Telemetry, init_logger, run_metrics_collector},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = env_flag(std::env::var("DEV_MODE").ok());
    let is_enable_file = env_flag(std::env::var("ENABLE_FILE_LOG").ok());

    let telemetry = Telemetry::from_env("frontend").context("Failed to initialize telemetry")?;

    let _log_guard = init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        "frontend",
        is_dev,
        is_enable_file,
    );

    let config = Config::init().context("Failed to load configuration")?;

    info!("🔗 Using backend URL: {}", config.api_url);
    info!("📁 Serving static files from: {}", config.static_dir);

    let state = AppState::new(&config);

    tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

    let result = AppRouter::serve(config.port, state).await;

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("Failed to shutdown telemetry: {e}");
        }
    }

    info!("✅ Frontend shutdown complete.");

    result
}
