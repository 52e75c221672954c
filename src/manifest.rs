//! Manifest serialization: the JSON artifact a scan produces and the
//! read-back used by `status` and `validate`.

use crate::error::ScanError;
use crate::tree::node::TreeNode;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Aggregate counts over a node sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManifestSummary {
    pub directories: u64,
    pub files: u64,
    pub total_bytes: u64,
}

/// Serialize nodes as the manifest document: UTF-8, 2-space indentation,
/// no trailing newline.
pub fn to_json(nodes: &[TreeNode]) -> Result<String, ScanError> {
    serde_json::to_string_pretty(nodes).map_err(ScanError::from)
}

/// Write the manifest to `output`, creating its parent directory when
/// missing.
pub fn write(nodes: &[TreeNode], output: &Path) -> Result<(), ScanError> {
    let json = to_json(nodes)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ScanError::io(parent, e))?;
        }
    }

    fs::write(output, json).map_err(|e| ScanError::io(output, e))
}

/// Read a previously written manifest back into nodes.
pub fn read(output: &Path) -> Result<Vec<TreeNode>, ScanError> {
    if !output.exists() {
        return Err(ScanError::ManifestMissing(output.to_path_buf()));
    }
    let text = fs::read_to_string(output).map_err(|e| ScanError::io(output, e))?;
    serde_json::from_str(&text).map_err(ScanError::from)
}

/// Count directories, files, and bytes across the whole tree.
pub fn summarize(nodes: &[TreeNode]) -> ManifestSummary {
    fn visit(nodes: &[TreeNode], summary: &mut ManifestSummary) {
        for node in nodes {
            match node {
                TreeNode::Directory(dir) => {
                    summary.directories += 1;
                    visit(&dir.children, summary);
                }
                TreeNode::File(file) => {
                    summary.files += 1;
                    summary.total_bytes += file.size;
                }
            }
        }
    }

    let mut summary = ManifestSummary {
        directories: 0,
        files: 0,
        total_bytes: 0,
    };
    visit(nodes, &mut summary);
    summary
}
