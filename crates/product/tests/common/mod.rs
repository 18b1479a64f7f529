#![allow(dead_code)]

use async_trait::async_trait;
use product::{
    abstract_trait::product::repository::{ProductQueryRepositoryTrait, SchemaRepositoryTrait},
    di::DependenciesInjectDeps,
    domain::primary_key::{ColumnInfo, PrimaryKeyColumn},
    model::product::{ProductRow, SeedProduct},
    state::AppState,
};
use serde_json::{Value, json};
use shared::errors::RepositoryError;
use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

pub const DEFAULT_COLUMNS: [&str; 8] = [
    "product_id",
    "name",
    "description",
    "price",
    "image_url",
    "stock_quantity",
    "created_at",
    "updated_at",
];

/// Integer for the usual key names, text for everything else.
fn default_udt_name(column: &str) -> &'static str {
    match column {
        "id" | "product_id" | "stock_quantity" => "int4",
        "price" => "numeric",
        _ => "text",
    }
}

#[derive(Default)]
struct CatalogState {
    columns: Option<Vec<ColumnInfo>>,
    rows: Vec<ProductRow>,
}

/// A `products` table held in memory. Serves both repository seams.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
    introspections: AtomicUsize,
    fail_introspection: AtomicBool,
    fail_queries: AtomicBool,
}

impl InMemoryCatalog {
    /// No `products` table at all.
    pub fn absent() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_columns(columns: &[&str]) -> Arc<Self> {
        let catalog = Self::default();
        catalog.set_columns(columns);
        Arc::new(catalog)
    }

    pub fn with_rows(columns: &[&str], rows: Vec<Value>) -> Arc<Self> {
        let catalog = Self::with_columns(columns);
        {
            let mut state = catalog.state.lock().unwrap();
            state.rows = rows.into_iter().map(into_row).collect();
        }
        catalog
    }

    pub fn set_columns(&self, columns: &[&str]) {
        self.state.lock().unwrap().columns = Some(
            columns
                .iter()
                .map(|c| ColumnInfo::new(*c, default_udt_name(c)))
                .collect(),
        );
    }

    pub fn fail_introspection(&self, fail: bool) {
        self.fail_introspection.store(fail, Ordering::SeqCst);
    }

    pub fn fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    pub fn introspections(&self) -> usize {
        self.introspections.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<ProductRow> {
        self.state.lock().unwrap().rows.clone()
    }

    pub fn deps(self: &Arc<Self>) -> DependenciesInjectDeps {
        DependenciesInjectDeps {
            product_query_repo: self.clone(),
            schema_repo: self.clone(),
        }
    }

    pub fn app_state(self: &Arc<Self>) -> AppState {
        AppState::new(self.deps())
    }

    fn check_queries(&self) -> Result<(), RepositoryError> {
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(RepositoryError::Custom(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }

    fn check_table(&self) -> Result<(), RepositoryError> {
        if self.state.lock().unwrap().columns.is_none() {
            return Err(RepositoryError::Custom(
                "relation \"products\" does not exist".to_string(),
            ));
        }
        Ok(())
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn into_row(value: Value) -> ProductRow {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

#[async_trait]
impl SchemaRepositoryTrait for InMemoryCatalog {
    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check_queries()
    }

    async fn table_exists(&self) -> Result<bool, RepositoryError> {
        self.check_queries()?;
        Ok(self.state.lock().unwrap().columns.is_some())
    }

    async fn columns(&self) -> Result<Vec<ColumnInfo>, RepositoryError> {
        self.introspections.fetch_add(1, Ordering::SeqCst);

        // Widen the window in which concurrent callers could race.
        tokio::time::sleep(Duration::from_millis(20)).await;

        if self.fail_introspection.load(Ordering::SeqCst) {
            return Err(RepositoryError::Custom(
                "permission denied for information_schema".to_string(),
            ));
        }

        Ok(self
            .state
            .lock()
            .unwrap()
            .columns
            .clone()
            .unwrap_or_default())
    }

    async fn create_table(&self) -> Result<(), RepositoryError> {
        self.check_queries()?;
        self.set_columns(&DEFAULT_COLUMNS);
        Ok(())
    }

    async fn count_rows(&self) -> Result<i64, RepositoryError> {
        self.check_queries()?;
        self.check_table()?;
        Ok(self.state.lock().unwrap().rows.len() as i64)
    }

    async fn insert_products(&self, products: &[SeedProduct]) -> Result<u64, RepositoryError> {
        self.check_queries()?;
        self.check_table()?;

        let mut state = self.state.lock().unwrap();
        for product in products {
            let next_id = state.rows.len() as i64 + 1;
            state.rows.push(into_row(json!({
                "product_id": next_id,
                "name": product.name,
                "description": product.description,
                "price": product.price,
                "image_url": product.image_url,
                "stock_quantity": product.stock_quantity,
            })));
        }

        Ok(products.len() as u64)
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryCatalog {
    async fn find_all(
        &self,
        primary_key: &PrimaryKeyColumn,
    ) -> Result<Vec<ProductRow>, RepositoryError> {
        self.check_queries()?;
        self.check_table()?;

        let mut rows = self.rows();
        rows.sort_by_key(|row| {
            let key = row.get(primary_key.as_str());
            (
                key.and_then(Value::as_i64),
                key.map(as_text).unwrap_or_default(),
            )
        });
        Ok(rows)
    }

    async fn find_by_id(
        &self,
        primary_key: &PrimaryKeyColumn,
        id: &str,
    ) -> Result<Option<ProductRow>, RepositoryError> {
        self.check_queries()?;
        self.check_table()?;

        // Mirrors `$1::int4`: Postgres rejects text that is not an integer.
        if primary_key.sql_type() == Some("int4") && id.parse::<i32>().is_err() {
            return Err(RepositoryError::Custom(format!(
                "invalid input syntax for type integer: \"{id}\""
            )));
        }

        Ok(self.rows().into_iter().find(|row| {
            row.get(primary_key.as_str())
                .is_some_and(|value| as_text(value) == id)
        }))
    }
}
