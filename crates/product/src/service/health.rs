use crate::abstract_trait::product::{
    repository::DynSchemaRepository, service::HealthServiceTrait,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::error;

#[derive(Clone)]
pub struct HealthService {
    schema: DynSchemaRepository,
}

impl HealthService {
    pub fn new(schema: DynSchemaRepository) -> Self {
        Self { schema }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn check(&self) -> Result<(), ServiceError> {
        self.schema.ping().await.map_err(|e| {
            error!("❌ Health check failed: {e}");
            ServiceError::from(e)
        })
    }
}
