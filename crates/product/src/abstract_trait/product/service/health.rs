use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

#[async_trait]
pub trait HealthServiceTrait {
    async fn check(&self) -> Result<(), ServiceError>;
}
