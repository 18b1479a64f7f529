use crate::{
    abstract_trait::product::service::DynHealthService, domain::response::api::HealthResponse,
    state::AppState,
};
use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;

pub async fn health_check(Extension(service): Extension<DynHealthService>) -> impl IntoResponse {
    match service.check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::healthy())),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthResponse::unhealthy()),
        ),
    }
}

pub fn health_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .layer(Extension(app_state.di_container.health.clone()))
}
