use crate::{
    abstract_trait::backend::DynBackendClient, domain::validator::validate_product_list,
    state::AppState,
};
use axum::{
    Router,
    extract::Extension,
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;

/// Relays the Data Service product list once it is known to be a JSON array.
/// The upstream status code is ignored.
pub async fn get_products(
    Extension(backend): Extension<DynBackendClient>,
) -> Result<impl IntoResponse, HttpError> {
    let upstream = backend.fetch_products().await?;

    validate_product_list(&upstream.body)?;

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, "application/json")],
        upstream.body,
    ))
}

pub fn product_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/products", get(get_products))
        .layer(Extension(app_state.backend.clone()))
}
