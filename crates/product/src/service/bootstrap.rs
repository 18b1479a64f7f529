use crate::{
    abstract_trait::product::repository::DynSchemaRepository, model::product::SEED_PRODUCTS,
    service::primary_key::PrimaryKeyResolver,
};
use shared::errors::ServiceError;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The table was missing; it was created and seeded.
    Created,
    /// The table existed with no rows and was seeded.
    Seeded,
    AlreadyPopulated { rows: i64 },
}

pub struct SchemaBootstrap {
    schema: DynSchemaRepository,
    primary_key: Arc<PrimaryKeyResolver>,
}

impl SchemaBootstrap {
    pub fn new(schema: DynSchemaRepository, primary_key: Arc<PrimaryKeyResolver>) -> Self {
        Self {
            schema,
            primary_key,
        }
    }

    pub async fn ensure_schema(&self) -> Result<BootstrapOutcome, ServiceError> {
        if !self.schema.table_exists().await? {
            self.schema.create_table().await?;
            self.schema.insert_products(&SEED_PRODUCTS).await?;
            return Ok(BootstrapOutcome::Created);
        }

        let rows = self.schema.count_rows().await?;
        if rows > 0 {
            return Ok(BootstrapOutcome::AlreadyPopulated { rows });
        }

        self.schema.insert_products(&SEED_PRODUCTS).await?;
        Ok(BootstrapOutcome::Seeded)
    }

    /// Startup entry point. Failures are logged and never returned.
    pub async fn run(&self) {
        info!("🗄️ Initializing database...");

        match self.ensure_schema().await {
            Ok(BootstrapOutcome::Created) => {
                info!("✅ Products table created and seeded with sample data")
            }
            Ok(BootstrapOutcome::Seeded) => {
                info!("✅ Empty products table seeded with sample data")
            }
            Ok(BootstrapOutcome::AlreadyPopulated { rows }) => {
                info!("📦 Products table already holds {rows} rows, skipping seed")
            }
            Err(e) => error!("❌ Database initialization failed: {e}"),
        }

        match self.primary_key.refresh().await {
            Ok(column) => info!("🔑 Primary key column resolved: {column}"),
            Err(e) => error!("❌ Could not resolve primary key column: {e}"),
        }
    }
}
