//! Error types for leafdx

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Model artifact errors.
///
/// `NotFound` and `Load` are startup failures: the process must not classify anything after
/// either of them.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Model file '{}' could not be loaded: {}", .path.display(), .reason)]
    Load { path: PathBuf, reason: String },

    #[error("Inference failed: {0}")]
    Inference(String),
}

impl ModelError {
    /// Whether this error happened while loading the artifact
    pub fn is_startup_failure(&self) -> bool {
        matches!(self, ModelError::NotFound(_) | ModelError::Load { .. })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid image format: {0}")]
    InvalidImageFormat(String),

    #[error("Unknown class label: {0}")]
    UnknownLabel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
