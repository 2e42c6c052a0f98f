// Error handling utilities
// Author: Gabriel Demetrios Lafis

use thiserror::Error;

use crate::processing::ProcessingError;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Processing error: {0}")]
    Processing(#[from] ProcessingError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AppError
pub type AppResult<T> = Result<T, AppError>;
