//! Error types for the canopy manifest generator.

use std::path::PathBuf;
use thiserror::Error;

/// Scan and manifest errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest not found: {0}. Run `canopy scan` to create it.")]
    ManifestMissing(PathBuf),

    #[error("Manifest at {path} is stale: {detail}. Run `canopy scan` to refresh it.")]
    ManifestStale { path: PathBuf, detail: String },
}

impl ScanError {
    /// Attach the affected path to an underlying I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for ScanError {
    fn from(err: config::ConfigError) -> Self {
        ScanError::Config(err.to_string())
    }
}
