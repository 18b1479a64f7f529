use crate::{
    abstract_trait::product::repository::DynSchemaRepository,
    domain::primary_key::{PrimaryKeyColumn, PrimaryKeySource},
};
use shared::errors::ServiceError;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, warn};

/// Lazily discovers which column of `products` identifies a row.
///
/// The first successful introspection is cached until [`refresh`] replaces
/// it. Concurrent cold callers wait on `init_lock` and share the outcome of
/// the attempt they queued behind, so the catalog is read once per wave.
/// A failed attempt yields the fallback column, which is never cached.
///
/// [`refresh`]: PrimaryKeyResolver::refresh
pub struct PrimaryKeyResolver {
    schema: DynSchemaRepository,
    cached: RwLock<Option<PrimaryKeyColumn>>,
    init_lock: Mutex<()>,
    attempts: AtomicU64,
}

impl PrimaryKeyResolver {
    pub fn new(schema: DynSchemaRepository) -> Self {
        Self {
            schema,
            cached: RwLock::new(None),
            init_lock: Mutex::new(()),
            attempts: AtomicU64::new(0),
        }
    }

    pub async fn resolve(&self) -> PrimaryKeyColumn {
        if let Some(column) = self.cached().await {
            return column;
        }

        let seen = self.attempts.load(Ordering::Acquire);
        let _guard = self.init_lock.lock().await;

        if let Some(column) = self.cached().await {
            return column;
        }

        // Someone introspected while we waited and it failed.
        if self.attempts.load(Ordering::Acquire) != seen {
            return PrimaryKeyColumn::fallback();
        }

        let result = self.introspect().await;
        if let Ok(column) = &result {
            *self.cached.write().await = Some(column.clone());
        }
        self.attempts.fetch_add(1, Ordering::AcqRel);

        result.unwrap_or_else(|e| {
            error!("❌ Error determining primary key column: {e}");
            PrimaryKeyColumn::fallback()
        })
    }

    /// Re-reads the catalog and replaces the cached column.
    pub async fn refresh(&self) -> Result<PrimaryKeyColumn, ServiceError> {
        let _guard = self.init_lock.lock().await;

        let result = self.introspect().await;
        if let Ok(column) = &result {
            *self.cached.write().await = Some(column.clone());
        }
        self.attempts.fetch_add(1, Ordering::AcqRel);

        result
    }

    pub async fn cached(&self) -> Option<PrimaryKeyColumn> {
        self.cached.read().await.clone()
    }

    async fn introspect(&self) -> Result<PrimaryKeyColumn, ServiceError> {
        let columns = self.schema.columns().await?;

        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        info!("📋 Available columns: {}", names.join(", "));

        let (column, source) = PrimaryKeyColumn::resolve(&columns).ok_or_else(|| {
            ServiceError::Internal("products table reports no columns".to_string())
        })?;

        if source == PrimaryKeySource::FirstColumn {
            warn!("⚠️ No id or product_id column found, using first column {column}");
        }

        info!("🔑 Using {column} as primary key column");

        Ok(column)
    }
}
