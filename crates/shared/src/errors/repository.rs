use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// The underlying driver message, without the variant prefix.
    pub fn details(&self) -> String {
        match self {
            RepositoryError::Sqlx(err) => err.to_string(),
            RepositoryError::Custom(msg) => msg.clone(),
        }
    }
}
