//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a quiz store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid quiz document: {0}")]
    Json(#[from] serde_json::Error),

    /// The connection to a remote store failed.
    #[error("Transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    /// The remote store answered with a failure.
    #[error("Remote store refused request: {0}")]
    Remote(String),

    /// The remote store answered with something we did not ask for.
    #[error("Unexpected response from store: {0}")]
    UnexpectedResponse(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error type for quiz operations.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to encode quiz: {0}")]
    Encode(#[from] serde_json::Error),
}
