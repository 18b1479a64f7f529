use crate::{abstract_trait::backend::BackendClientTrait, domain::upstream::UpstreamResponse};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use reqwest::{Client, header::HeaderMap};
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use std::collections::BTreeMap;
use tracing::{error, info};

const TRACER_NAME: &str = "backend-client";

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    metrics: Metrics,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("backend_client", registry);

        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            metrics,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get(&self, operation: &str, path: &str) -> Result<UpstreamResponse, ServiceError> {
        let url = self.url(path);
        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            operation,
            vec![KeyValue::new("http.url", url.clone())],
        );

        info!("➡️ Proxying request to backend: {url}");

        let result = async {
            let response = self.client.get(&url).send().await?;
            let status = response.status().as_u16();
            let headers = flatten_headers(response.headers());
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(UpstreamResponse {
                status,
                headers,
                body,
            })
        }
        .await;

        match result {
            Ok(upstream) => {
                info!("⬅️ Backend response status: {}", upstream.status);
                tracing_ctx.complete_success(
                    &self.metrics,
                    Method::Get,
                    &format!("{operation} returned {}", upstream.status),
                );
                Ok(upstream)
            }
            Err(e) => {
                error!("❌ Error connecting to backend service: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(ServiceError::Upstream {
                    url,
                    message: e.to_string(),
                })
            }
        }
    }
}

fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flattened: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        flattened
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    flattened
}

#[async_trait]
impl BackendClientTrait for BackendClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_products(&self) -> Result<UpstreamResponse, ServiceError> {
        self.get("FetchProducts", "/api/products").await
    }

    async fn health(&self) -> Result<UpstreamResponse, ServiceError> {
        self.get("BackendHealth", "/api/health").await
    }
}
