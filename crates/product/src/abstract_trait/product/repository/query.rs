use crate::{domain::primary_key::PrimaryKeyColumn, model::product::ProductRow};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Every row, ascending by `primary_key`.
    async fn find_all(
        &self,
        primary_key: &PrimaryKeyColumn,
    ) -> Result<Vec<ProductRow>, RepositoryError>;
    async fn find_by_id(
        &self,
        primary_key: &PrimaryKeyColumn,
        id: &str,
    ) -> Result<Option<ProductRow>, RepositoryError>;
}
