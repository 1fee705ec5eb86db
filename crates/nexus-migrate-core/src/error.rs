//! Error types for nexus-migrate-core

use std::path::PathBuf;

use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The OpenClaw config file exists but could not be read as JSON.
    #[error("Malformed config {}: {source}", path.display())]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

/// Result type alias using Error.
pub type Result<T> = std::result::Result<T, Error>;
