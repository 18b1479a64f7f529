use crate::{
    abstract_trait::backend::DynBackendClient,
    domain::response::{BackendHealthResponse, BackendUnreachableResponse},
    state::AppState,
};
use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use shared::errors::ServiceError;
use std::sync::Arc;
use tracing::info;

pub async fn debug_backend(Extension(backend): Extension<DynBackendClient>) -> Response {
    let health_url = format!("{}/api/health", backend.base_url());
    info!("🩺 Checking backend health at: {health_url}");

    match backend.health().await {
        Ok(upstream) => {
            let data = upstream.body_text();
            let body = BackendHealthResponse {
                status: "Backend connection successful".to_string(),
                status_code: upstream.status,
                headers: upstream.headers,
                data,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            let error = match e {
                ServiceError::Upstream { message, .. } => message,
                other => other.to_string(),
            };
            let body = BackendUnreachableResponse {
                status: "Backend connection failed".to_string(),
                error,
                health_url,
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

pub fn debug_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/debug/backend", get(debug_backend))
        .layer(Extension(app_state.backend.clone()))
}
