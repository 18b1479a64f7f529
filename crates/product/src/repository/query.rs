use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::primary_key::PrimaryKeyColumn,
    model::product::{PRODUCTS_TABLE, ProductRow},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::types::Json;
use tracing::{error, info};

pub(crate) fn find_all_sql(primary_key: &PrimaryKeyColumn) -> String {
    format!(
        "SELECT row_to_json(p) FROM {PRODUCTS_TABLE} p ORDER BY p.{} ASC",
        primary_key.quoted()
    )
}

pub(crate) fn find_by_id_sql(primary_key: &PrimaryKeyColumn) -> String {
    format!(
        "SELECT row_to_json(p) FROM {PRODUCTS_TABLE} p WHERE {}",
        primary_key.equals_param("p", 1)
    )
}

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        primary_key: &PrimaryKeyColumn,
    ) -> Result<Vec<ProductRow>, RepositoryError> {
        info!("🔍 Fetching all products ordered by {primary_key}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = find_all_sql(primary_key);

        let rows = sqlx::query_scalar::<_, Json<ProductRow>>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Retrieved {} products", rows.len());

        Ok(rows.into_iter().map(|Json(row)| row).collect())
    }

    async fn find_by_id(
        &self,
        primary_key: &PrimaryKeyColumn,
        id: &str,
    ) -> Result<Option<ProductRow>, RepositoryError> {
        info!("🆔 Fetching product by {primary_key} = {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = find_by_id_sql(primary_key);

        let row = sqlx::query_scalar::<_, Json<ProductRow>>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(row.map(|Json(row)| row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_orders_by_quoted_key() {
        assert_eq!(
            find_all_sql(&PrimaryKeyColumn::new("product_id")),
            "SELECT row_to_json(p) FROM products p ORDER BY p.\"product_id\" ASC"
        );
    }

    #[test]
    fn lookup_casts_the_raw_id_to_the_key_type() {
        assert_eq!(
            find_by_id_sql(&PrimaryKeyColumn::with_type("id", "int4")),
            "SELECT row_to_json(p) FROM products p WHERE p.\"id\" = $1::\"int4\""
        );
        assert_eq!(
            find_by_id_sql(&PrimaryKeyColumn::with_type("sku", "text")),
            "SELECT row_to_json(p) FROM products p WHERE p.\"sku\" = $1::\"text\""
        );
    }

    #[test]
    fn lookup_without_known_type_compares_text() {
        assert_eq!(
            find_by_id_sql(&PrimaryKeyColumn::fallback()),
            "SELECT row_to_json(p) FROM products p WHERE p.\"product_id\"::TEXT = $1"
        );
    }
}
