#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Bytes,
    http::{StatusCode, header::CONTENT_TYPE},
    routing::get,
};
use frontend::{
    abstract_trait::backend::BackendClientTrait, config::Config,
    domain::upstream::UpstreamResponse, state::AppState,
};
use prometheus_client::registry::Registry;
use shared::errors::ServiceError;
use std::{collections::BTreeMap, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

pub const BACKEND_URL: &str = "http://ecommerce-backend:8080";

/// Canned Data Service replies. `None` simulates a refused connection.
pub struct FakeBackend {
    pub products: Option<&'static str>,
    pub health: Option<(u16, &'static str)>,
}

impl FakeBackend {
    pub fn serving(products: &'static str) -> Arc<Self> {
        Arc::new(Self {
            products: Some(products),
            health: Some((200, r#"{"status":"ok"}"#)),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            products: None,
            health: None,
        })
    }

    fn connection_refused(path: &str) -> ServiceError {
        ServiceError::Upstream {
            url: format!("{BACKEND_URL}{path}"),
            message: "connect ECONNREFUSED".to_string(),
        }
    }
}

#[async_trait]
impl BackendClientTrait for FakeBackend {
    fn base_url(&self) -> &str {
        BACKEND_URL
    }

    async fn fetch_products(&self) -> Result<UpstreamResponse, ServiceError> {
        let body = self
            .products
            .ok_or_else(|| Self::connection_refused("/api/products"))?;

        Ok(UpstreamResponse {
            status: 200,
            headers: BTreeMap::from([("content-type".into(), "application/json".into())]),
            body: Bytes::from_static(body.as_bytes()),
        })
    }

    async fn health(&self) -> Result<UpstreamResponse, ServiceError> {
        let (status, body) = self
            .health
            .ok_or_else(|| Self::connection_refused("/api/health"))?;

        Ok(UpstreamResponse {
            status,
            headers: BTreeMap::from([("content-type".into(), "application/json".into())]),
            body: Bytes::from_static(body.as_bytes()),
        })
    }
}

pub fn test_config(expose_config_endpoint: bool) -> Config {
    Config {
        port: 0,
        api_url: BACKEND_URL.to_string(),
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/public").to_string(),
        expose_config_endpoint,
    }
}

pub fn app_state(backend: Arc<FakeBackend>, expose_config_endpoint: bool) -> AppState {
    AppState::with_backend(
        &test_config(expose_config_endpoint),
        backend,
        Registry::default(),
    )
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn start_mock_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

pub fn mock_data_service(products: &'static str) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(move || async move { ([(CONTENT_TYPE, "application/json")], products) }),
        )
        .route(
            "/api/health",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(CONTENT_TYPE, "application/json")],
                    r#"{"status":"error","message":"Database connection failed"}"#,
                )
            }),
        )
}

/// An address nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
