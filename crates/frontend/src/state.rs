use crate::{abstract_trait::backend::DynBackendClient, config::Config, service::BackendClient};
use prometheus_client::registry::Registry;
use shared::utils::SystemMetrics;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub backend: DynBackendClient,
    pub static_dir: String,
    pub expose_config_endpoint: bool,
    pub registry: Arc<Registry>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.backend.base_url())
            .field("static_dir", &self.static_dir)
            .field("expose_config_endpoint", &self.expose_config_endpoint)
            .finish()
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mut registry = Registry::default();
        let backend: DynBackendClient =
            Arc::new(BackendClient::new(config.api_url.clone(), &mut registry));

        Self::with_backend(config, backend, registry)
    }

    pub fn with_backend(config: &Config, backend: DynBackendClient, mut registry: Registry) -> Self {
        let system_metrics = Arc::new(SystemMetrics::new());
        system_metrics.register(&mut registry);

        Self {
            backend,
            static_dir: config.static_dir.clone(),
            expose_config_endpoint: config.expose_config_endpoint,
            registry: Arc::new(registry),
            system_metrics,
        }
    }
}
