use crate::{
    abstract_trait::backend::DynBackendClient, domain::response::ConfigResponse, state::AppState,
};
use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::get};
use std::{collections::BTreeMap, sync::Arc};

pub async fn get_config(Extension(backend): Extension<DynBackendClient>) -> impl IntoResponse {
    let environment: BTreeMap<String, String> = std::env::vars_os()
        .map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        })
        .collect();

    Json(ConfigResponse {
        backend_url: backend.base_url().to_string(),
        environment,
    })
}

pub fn config_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/config", get(get_config))
        .layer(Extension(app_state.backend.clone()))
}
