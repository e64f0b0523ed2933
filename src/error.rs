use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("Color Error: {0}")]
    Color(#[from] ColorError),
    #[error("Analysis worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("Configuration Error: {0}")]
    Configuration(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Usage: {0}")]
    Usage(String),
}

// Color Error Type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

// Journal Error Type, never surfaced to the caller of the pipeline
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Journal unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write journal entry: {0}")]
    WriteError(#[from] std::io::Error),
    #[error("Failed to serialize journal entry: {0}")]
    Serialization(#[from] serde_json::Error),
}
