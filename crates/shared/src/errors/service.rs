use crate::errors::repository::RepositoryError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream request to {url} failed: {message}")]
    Upstream { url: String, message: String },

    #[error("Upstream payload is not valid JSON: {message}")]
    UpstreamParse { message: String, raw_excerpt: String },

    #[error("Upstream payload is a JSON {received}, expected an array")]
    UpstreamShape {
        received: &'static str,
        data: Value,
        raw_excerpt: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
