use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
    service::primary_key::PrimaryKeyResolver,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use std::sync::Arc;
use tracing::{error, info};

const TRACER_NAME: &str = "product-query-service";

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub primary_key: Arc<PrimaryKeyResolver>,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(
        query: DynProductQueryRepository,
        primary_key: Arc<PrimaryKeyResolver>,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", registry);

        Self {
            query,
            primary_key,
            metrics,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "FindAllProducts",
            vec![KeyValue::new("component", "product")],
        );

        let primary_key = self.primary_key.resolve().await;

        let rows = match self.query.find_all(&primary_key).await {
            Ok(rows) => rows,
            Err(e) => {
                error!("❌ Error fetching products: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, "Failed to fetch products");
                return Err(ServiceError::Repo(e));
            }
        };

        let products: Vec<ProductResponse> = rows
            .into_iter()
            .map(|row| ProductResponse::normalize(row, &primary_key))
            .collect();

        tracing_ctx.complete_success(
            &self.metrics,
            Method::Get,
            &format!("Fetched {} products", products.len()),
        );

        Ok(products)
    }

    async fn find_by_id(&self, id: &str) -> Result<ProductResponse, ServiceError> {
        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "FindProductById",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let primary_key = self.primary_key.resolve().await;

        match self.query.find_by_id(&primary_key, id).await {
            Ok(Some(row)) => {
                tracing_ctx.complete_success(
                    &self.metrics,
                    Method::Get,
                    &format!("Fetched product {id}"),
                );
                Ok(ProductResponse::normalize(row, &primary_key))
            }
            Ok(None) => {
                info!("🔍 Product {id} not found");
                tracing_ctx.complete_error(&self.metrics, Method::Get, "Product not found");
                Err(ServiceError::NotFound("Product not found".to_string()))
            }
            Err(e) => {
                error!("❌ Error fetching product {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, "Failed to fetch product");
                Err(ServiceError::Repo(e))
            }
        }
    }
}
