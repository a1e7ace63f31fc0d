//! Errors surfaced by the replay binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Usage: {0}")]
    Usage(String),
}

pub type AppResult<T> = Result<T, AppError>;
