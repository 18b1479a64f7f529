use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendHealthResponse {
    pub status: String,
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendUnreachableResponse {
    pub status: String,
    pub error: String,
    pub health_url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub backend_url: String,
    pub environment: BTreeMap<String, String>,
}
