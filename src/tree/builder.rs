//! Tree builder for constructing directory manifests

use crate::error::ScanError;
use crate::tree::collate;
use crate::tree::node::{extension_for, DirectoryNode, FileNode, TreeNode};
use crate::tree::path;
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Leading segment of every reported path.
pub const DEFAULT_LABEL: &str = "Files";

/// Tree builder for constructing directory manifests
pub struct TreeBuilder {
    root: PathBuf,
    label: String,
    walker_config: Option<WalkerConfig>,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            label: DEFAULT_LABEL.to_string(),
            walker_config: None,
        }
    }

    /// Set the leading segment of reported paths (default: `Files`).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set walker config (symlink handling, ignore names, depth bound).
    /// When set, the walker uses this config instead of the default.
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Build the ordered tree of the root's contents.
    ///
    /// Depth-first and synchronous. Each level is sorted with directories
    /// before files, names in collation order. Any listing or metadata
    /// failure aborts the whole build.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Vec<TreeNode>, ScanError> {
        let start = Instant::now();
        info!("Starting tree build");

        let config = self.walker_config.clone().unwrap_or_default();
        let max_depth = config.max_depth;
        let walker = Walker::with_config(config);

        let root = path::canonicalize_root(&self.root)?;
        let label = path::to_forward_slashes(&self.label);

        let nodes = build_level(&walker, &root, &label, 0, max_depth)?;

        info!(
            top_level_entries = nodes.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Tree build completed"
        );

        Ok(nodes)
    }
}

/// Produce the ordered node sequence for one directory, recursing into
/// subdirectories with the extended path prefix.
fn build_level(
    walker: &Walker,
    dir: &Path,
    prefix: &str,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<Vec<TreeNode>, ScanError> {
    let mut nodes = Vec::new();

    for entry in walker.list(dir)? {
        match entry {
            Entry::Directory { path, name } => {
                let item_path = path::join_virtual(prefix, &name);
                let children = match max_depth {
                    Some(limit) if depth + 1 >= limit => {
                        debug!(path = %item_path, "Depth bound reached, not descending");
                        Vec::new()
                    }
                    _ => build_level(walker, &path, &item_path, depth + 1, max_depth)?,
                };
                nodes.push(TreeNode::Directory(DirectoryNode {
                    name,
                    path: item_path,
                    children,
                }));
            }
            Entry::File {
                name,
                size,
                modified,
                ..
            } => {
                let item_path = path::join_virtual(prefix, &name);
                let extension = extension_for(&name);
                nodes.push(TreeNode::File(FileNode {
                    name,
                    path: item_path,
                    size,
                    extension,
                    last_modified: modified,
                }));
            }
        }
    }

    nodes.sort_by(collate::compare_nodes);
    Ok(nodes)
}
