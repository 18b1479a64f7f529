use crate::domain::upstream::UpstreamResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynBackendClient = Arc<dyn BackendClientTrait + Send + Sync>;

/// HTTP access to the Data Service. Any status code counts as a response;
/// only transport failures become [`ServiceError::Upstream`].
#[async_trait]
pub trait BackendClientTrait {
    fn base_url(&self) -> &str;
    async fn fetch_products(&self) -> Result<UpstreamResponse, ServiceError>;
    async fn health(&self) -> Result<UpstreamResponse, ServiceError>;
}
