use crate::{abstract_trait::product::service::DynProductQueryService, state::AppState};
use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;

pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.find_all().await?;
    Ok((StatusCode::OK, Json(products)))
}

pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.find_by_id(&id).await?;
    Ok((StatusCode::OK, Json(product)))
}

pub fn product_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", get(get_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
}
