use crate::{domain::primary_key::ColumnInfo, model::product::SeedProduct};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSchemaRepository = Arc<dyn SchemaRepositoryTrait + Send + Sync>;

/// Catalog access for the `products` table.
#[async_trait]
pub trait SchemaRepositoryTrait {
    async fn ping(&self) -> Result<(), RepositoryError>;
    async fn table_exists(&self) -> Result<bool, RepositoryError>;
    /// Columns in declaration order; empty when the table is missing.
    async fn columns(&self) -> Result<Vec<ColumnInfo>, RepositoryError>;
    async fn create_table(&self) -> Result<(), RepositoryError>;
    async fn count_rows(&self) -> Result<i64, RepositoryError>;
    async fn insert_products(&self, products: &[SeedProduct]) -> Result<u64, RepositoryError>;
}
