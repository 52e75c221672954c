//! CLI route: single route table and run context. Dispatches to the scan
//! service and presentation.

use crate::cli::help::command_name;
use crate::cli::output::{format_scan_report, format_status_report, format_validate_report};
use crate::cli::parse::Commands;
use crate::config::{CanopyConfig, ConfigLoader};
use crate::error::ScanError;
use crate::scan::{self, ScanOptions};
use crate::tree::walker::WalkerConfig;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: workspace root and resolved
/// configuration. Built from workspace path and optional config path using
/// ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: CanopyConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ScanError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        Ok(Self {
            workspace_root,
            config,
        })
    }

    /// Resolved configuration.
    pub fn config(&self) -> &CanopyConfig {
        &self.config
    }

    /// Apply CLI path overrides on top of the loaded configuration.
    pub fn apply_overrides(
        &mut self,
        root: Option<PathBuf>,
        output: Option<PathBuf>,
        label: Option<String>,
    ) -> Result<(), ScanError> {
        if let Some(root) = root {
            self.config.scan.root = root;
        }
        if let Some(output) = output {
            self.config.scan.output = output;
        }
        if let Some(label) = label {
            self.config.scan.label = label;
        }
        self.config.scan.validate().map_err(ScanError::Config)
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ScanError> {
        let started = Instant::now();
        info!(command = command_name(command), "Executing command");

        let result = match command {
            Commands::Scan { dry_run } => {
                let report = scan::run_scan(&self.scan_options(*dry_run))?;
                Ok(format_scan_report(&report))
            }
            Commands::Status { format } => {
                let report = scan::manifest_status(&self.scan_options(false))?;
                format_status_report(&report, format)
            }
            Commands::Validate { format } => {
                let report = scan::run_validate(&self.scan_options(false))?;
                format_validate_report(&report, format)
            }
        };

        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn scan_options(&self, dry_run: bool) -> ScanOptions {
        let scan = &self.config.scan;
        ScanOptions {
            root: self.resolve(&scan.root),
            output: self.resolve(&scan.output),
            label: scan.label.clone(),
            walker: WalkerConfig {
                follow_symlinks: scan.follow_symlinks,
                ignore_patterns: scan.ignore.clone(),
                max_depth: scan.max_depth,
            },
            dry_run,
        }
    }

    /// Relative configured paths resolve against the workspace root.
    fn resolve(&self, path: &Path) -> PathBuf {
        self.workspace_root.join(path)
    }
}
