//! CLI parse: clap types for Canopy. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Canopy CLI - Deterministic directory tree manifests
#[derive(Parser)]
#[command(name = "canopy")]
#[command(about = "Generate deterministic JSON manifests of a directory tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (configuration discovery)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory to scan (overrides configuration)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Manifest output path (overrides configuration)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Leading segment of reported paths (overrides configuration)
    #[arg(long)]
    pub label: Option<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the root directory and write the manifest
    Scan {
        /// Report counts without writing the manifest
        #[arg(long)]
        dry_run: bool,
    },
    /// Show manifest status without rescanning
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Rescan and verify the manifest on disk is current
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
