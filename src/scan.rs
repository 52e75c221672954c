//! Scan service: the top-level driver tying builder, manifest, and
//! reporting together.

use crate::error::ScanError;
use crate::manifest::{self, ManifestSummary};
use crate::tree::builder::TreeBuilder;
use crate::tree::walker::WalkerConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Options for one scan invocation, resolved from configuration and CLI
/// overrides.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory to scan (created when missing)
    pub root: PathBuf,
    /// Manifest output path
    pub output: PathBuf,
    /// Leading segment of every reported path
    pub label: String,
    pub walker: WalkerConfig,
    /// Build and report without writing the manifest
    pub dry_run: bool,
}

/// Outcome of a completed scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub output: PathBuf,
    pub summary: ManifestSummary,
    pub duration_ms: u64,
    pub dry_run: bool,
}

/// Outcome of a successful validation: the manifest on disk matches a fresh
/// build byte for byte.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateReport {
    pub output: PathBuf,
    pub summary: ManifestSummary,
    pub fresh: bool,
}

/// Manifest state without rescanning.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub output: PathBuf,
    pub exists: bool,
    pub summary: Option<ManifestSummary>,
    pub written: Option<DateTime<Utc>>,
}

/// Scan the root and write the manifest.
///
/// A missing root is created, not reported as an error. Everything else
/// aborts the scan: no partial manifest is written.
pub fn run_scan(options: &ScanOptions) -> Result<ScanReport, ScanError> {
    let start = Instant::now();
    info!(root = %options.root.display(), "Scan starting");

    if !options.root.exists() {
        info!(root = %options.root.display(), "Creating scan root");
        fs::create_dir_all(&options.root).map_err(|e| ScanError::io(&options.root, e))?;
    }

    let nodes = build_tree(options)?;
    let summary = manifest::summarize(&nodes);

    if options.dry_run {
        debug!("Dry run, manifest not written");
    } else {
        manifest::write(&nodes, &options.output)?;
        info!(output = %options.output.display(), "Manifest written");
    }

    Ok(ScanReport {
        output: options.output.clone(),
        summary,
        duration_ms: start.elapsed().as_millis() as u64,
        dry_run: options.dry_run,
    })
}

/// Rebuild the tree and require the manifest on disk to match it byte for
/// byte. Timestamp drift counts as staleness.
pub fn run_validate(options: &ScanOptions) -> Result<ValidateReport, ScanError> {
    if !options.output.exists() {
        return Err(ScanError::ManifestMissing(options.output.clone()));
    }

    let nodes = build_tree(options)?;
    let fresh_json = manifest::to_json(&nodes)?;
    let disk_json =
        fs::read_to_string(&options.output).map_err(|e| ScanError::io(&options.output, e))?;

    if fresh_json != disk_json {
        let disk_nodes: Vec<crate::tree::node::TreeNode> = serde_json::from_str(&disk_json)?;
        let disk = manifest::summarize(&disk_nodes);
        let tree = manifest::summarize(&nodes);
        let detail = if disk == tree {
            "entries differ in metadata or ordering".to_string()
        } else {
            format!(
                "manifest records {} directories / {} files, tree has {} / {}",
                disk.directories, disk.files, tree.directories, tree.files
            )
        };
        return Err(ScanError::ManifestStale {
            path: options.output.clone(),
            detail,
        });
    }

    Ok(ValidateReport {
        output: options.output.clone(),
        summary: manifest::summarize(&nodes),
        fresh: true,
    })
}

/// Summarize the manifest on disk. A missing manifest is a reportable
/// state here, not an error.
pub fn manifest_status(options: &ScanOptions) -> Result<StatusReport, ScanError> {
    if !options.output.exists() {
        return Ok(StatusReport {
            output: options.output.clone(),
            exists: false,
            summary: None,
            written: None,
        });
    }

    let nodes = manifest::read(&options.output)?;
    let metadata =
        fs::metadata(&options.output).map_err(|e| ScanError::io(&options.output, e))?;
    let written = metadata.modified().ok().map(DateTime::<Utc>::from);

    Ok(StatusReport {
        output: options.output.clone(),
        exists: true,
        summary: Some(manifest::summarize(&nodes)),
        written,
    })
}

fn build_tree(options: &ScanOptions) -> Result<Vec<crate::tree::node::TreeNode>, ScanError> {
    TreeBuilder::new(options.root.clone())
        .with_label(&options.label)
        .with_walker_config(options.walker.clone())
        .build()
}
