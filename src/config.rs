//! Configuration System
//!
//! Layered configuration for scan inputs and logging. The scan root, output
//! path, and path label are explicit configuration rather than module-level
//! constants, with workspace and global TOML files plus `CANOPY_*`
//! environment overrides.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanopyConfig {
    /// Scan inputs and outputs
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory to scan (created when missing)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Manifest output path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Leading segment of every reported path
    #[serde(default = "default_label")]
    pub label: String,

    /// Treat directory symlinks as directories and descend through them
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Entry names excluded from the manifest
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Maximum traversal depth
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_root() -> PathBuf {
    PathBuf::from("public/Files")
}

fn default_output() -> PathBuf {
    PathBuf::from("public/files.json")
}

fn default_label() -> String {
    "Files".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
            label: default_label(),
            follow_symlinks: false,
            ignore: Vec::new(),
            max_depth: None,
        }
    }
}

impl Default for CanopyConfig {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Scan(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Scan(msg) => write!(f, "Scan: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ScanConfig {
    /// Validate scan configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.root.as_os_str().is_empty() {
            return Err("Scan root cannot be empty".to_string());
        }
        if self.output.as_os_str().is_empty() {
            return Err("Output path cannot be empty".to_string());
        }
        if self.label.is_empty() {
            return Err("Path label cannot be empty".to_string());
        }
        if self.label.starts_with('/') || self.label.ends_with('/') {
            return Err("Path label cannot start or end with '/'".to_string());
        }
        if self.max_depth == Some(0) {
            return Err("max_depth must be at least 1".to_string());
        }
        Ok(())
    }
}

impl CanopyConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.scan.validate() {
            errors.push(ValidationError::Scan(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
