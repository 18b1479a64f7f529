use crate::{
    abstract_trait::product::repository::SchemaRepositoryTrait,
    domain::primary_key::ColumnInfo,
    model::product::{PRODUCTS_TABLE, SeedProduct},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE products (
        product_id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        description TEXT,
        price NUMERIC(10,2) NOT NULL,
        image_url TEXT,
        stock_quantity INTEGER DEFAULT 0,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

const SEED_INSERT_PREFIX: &str =
    "INSERT INTO products (name, description, price, image_url, stock_quantity) ";

pub(crate) fn seed_insert(products: &[SeedProduct]) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new(SEED_INSERT_PREFIX);

    builder.push_values(products, |mut row, product| {
        row.push_bind(product.name)
            .push_bind(product.description)
            .push_bind(product.price)
            .push_unseparated("::NUMERIC(10,2)")
            .push_bind(product.image_url)
            .push_bind(product.stock_quantity);
    });

    builder
}

#[derive(Clone)]
pub struct SchemaRepository {
    db: ConnectionPool,
}

impl SchemaRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SchemaRepositoryTrait for SchemaRepository {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn table_exists(&self) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT FROM information_schema.tables
                WHERE table_schema = current_schema()
                  AND table_name = $1
            )
            "#,
        )
        .bind(PRODUCTS_TABLE)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        info!("📋 Products table exists: {exists}");

        Ok(exists)
    }

    async fn columns(&self) -> Result<Vec<ColumnInfo>, RepositoryError> {
        let columns = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT column_name::TEXT, udt_name::TEXT
            FROM information_schema.columns
            WHERE table_schema = current_schema()
              AND table_name = $1
            ORDER BY ordinal_position
            "#,
        )
        .bind(PRODUCTS_TABLE)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to read products columns: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(columns
            .into_iter()
            .map(|(name, udt_name)| ColumnInfo::new(name, udt_name))
            .collect())
    }

    async fn create_table(&self) -> Result<(), RepositoryError> {
        info!("🛠️ Creating products table...");

        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to create products table: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Products table created successfully");

        Ok(())
    }

    async fn count_rows(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        info!("📦 Found {count} existing products");

        Ok(count)
    }

    async fn insert_products(&self, products: &[SeedProduct]) -> Result<u64, RepositoryError> {
        if products.is_empty() {
            return Ok(0);
        }

        let mut builder = seed_insert(products);

        let result = builder.build().execute(&self.db).await.map_err(|e| {
            error!("❌ Failed to insert sample products: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Inserted {} sample products", result.rows_affected());

        Ok(result.rows_affected())
    }
}
