use anyhow::{Context, Result};
use product::{
    config::myconfig::Config, di::DependenciesInjectDeps, handler::AppRouter, state::AppState,
};
use shared::{
    config::{ConnectionManager, env_flag},
    utils::{Telemetry, init_logger, run_metrics_collector},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = env_flag(std::env::var("DEV_MODE").ok());
    let is_enable_file = env_flag(std::env::var("ENABLE_FILE_LOG").ok());

    let telemetry =
        Telemetry::from_env("product-service").context("Failed to initialize telemetry")?;

    let _log_guard = init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        "product-service",
        is_dev,
        is_enable_file,
    );

    info!("🚀 Starting Product Service initialization...");

    let config = Config::init().context("Failed to load configuration")?;

    info!(
        "🗄️ Database: {}@{}:{}/{}",
        config.database.user, config.database.host, config.database.port, config.database.name
    );

    let pool = ConnectionManager::new_pool(&config.database);

    let state = AppState::new(DependenciesInjectDeps::from_pool(pool));

    tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

    let bootstrap = state.di_container.bootstrap.clone();
    tokio::spawn(async move { bootstrap.run().await });

    let result = AppRouter::serve(config.port, state).await;

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("Failed to shutdown telemetry: {e}");
        }
    }

    info!("✅ Product Service shutdown complete.");

    result
}
