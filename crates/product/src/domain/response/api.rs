use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy, database connected".to_string(),
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            status: "error".to_string(),
            message: "Database connection failed".to_string(),
        }
    }
}
