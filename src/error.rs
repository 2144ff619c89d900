//! Error handling for the resume tailor application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeTailorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Embedding dimensions don't match: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Embedding model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Embedding generation error: {0}")]
    Embedding(String),

    #[error("Cache entry corrupt: {0}")]
    CacheCorrupt(String),

    #[error("Master list error: {0}")]
    MasterList(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rendering error: {0}")]
    Rendering(String),
}

pub type Result<T> = std::result::Result<T, ResumeTailorError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeTailorError {
    fn from(err: anyhow::Error) -> Self {
        ResumeTailorError::Embedding(err.to_string())
    }
}

/// Convert askama rendering errors to our custom error type
impl From<askama::Error> for ResumeTailorError {
    fn from(err: askama::Error) -> Self {
        ResumeTailorError::Rendering(err.to_string())
    }
}
