use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    NotFound(String),
    Internal(ErrorResponse),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => HttpError::Internal(
                ErrorResponse::new("Database error").with_details(repo_err.details()),
            ),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Upstream { url, message } => HttpError::Internal(
                ErrorResponse::new("Error connecting to backend service")
                    .with_context("message", message)
                    .with_context("backendUrl", url),
            ),

            ServiceError::UpstreamParse {
                message,
                raw_excerpt,
            } => HttpError::Internal(
                ErrorResponse::new("Error parsing backend response")
                    .with_context("message", message)
                    .with_context("rawData", raw_excerpt),
            ),

            ServiceError::UpstreamShape {
                received,
                data,
                raw_excerpt,
            } => HttpError::Internal(
                ErrorResponse::new("Backend response format error")
                    .with_context("received", received)
                    .with_context("data", data)
                    .with_context("rawData", raw_excerpt),
            ),

            ServiceError::Internal(msg) => {
                HttpError::Internal(ErrorResponse::new("Internal server error").with_details(msg))
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            HttpError::NotFound(msg) => ErrorResponse::new(msg),
            HttpError::Internal(body) => body,
        };

        (status, Json(body)).into_response()
    }
}
