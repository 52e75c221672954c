//! Tree node types for the directory manifest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the manifest: a directory with ordered children, or a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Directory(DirectoryNode),
    File(FileNode),
}

/// A directory entry. Children are ordered: directories first, then files,
/// each group in collation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: String,
    /// Forward-slash path relative to the root label, e.g. `Files/sub`
    pub path: String,
    pub children: Vec<TreeNode>,
}

/// A file entry with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    /// Forward-slash path relative to the root label, e.g. `Files/a.txt`
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// Lowercased extension including the leading dot, or empty
    pub extension: String,
    #[serde(rename = "lastModified")]
    pub last_modified: DateTime<Utc>,
}

impl TreeNode {
    /// Entry name as reported in the manifest.
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory(dir) => &dir.name,
            TreeNode::File(file) => &file.name,
        }
    }

    /// Reported path (root label prefixed, forward slashes).
    pub fn path(&self) -> &str {
        match self {
            TreeNode::Directory(dir) => &dir.path,
            TreeNode::File(file) => &file.path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }
}

/// Extension of a file name: the lowercased substring from the last `.`
/// onward. Names without a dot, and names whose only dot is the leading
/// character (`.gitignore`), have no extension.
pub fn extension_for(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}
