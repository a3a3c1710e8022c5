//! Error types for strike-watch

use thiserror::Error;

/// Main error type for strike-watch operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for strike-watch operations
pub type Result<T> = std::result::Result<T, Error>;
