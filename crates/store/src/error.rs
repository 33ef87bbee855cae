//! Error types for storage operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Built-in templates cannot be removed: {0}")]
    BuiltinTemplate(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
