//! Single-level directory listing for the tree builder

use crate::error::ScanError;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Immediate child of a scanned directory
#[derive(Debug, Clone)]
pub enum Entry {
    /// A file entry with its metadata
    File {
        path: PathBuf,
        name: String,
        size: u64,
        modified: DateTime<Utc>,
    },
    /// A directory entry
    Directory { path: PathBuf, name: String },
}

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether directory symlinks are treated as directories and descended
    /// into. Off by default; a symlink is then listed as a file carrying its
    /// target's metadata. Combine with `max_depth` on trees with symlink
    /// cycles.
    pub follow_symlinks: bool,
    /// Entry names excluded from every listing. Empty by default: the
    /// manifest reports every entry unless the operator opts out.
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

/// Lists the immediate children of one directory, with metadata.
#[derive(Default)]
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    pub fn new() -> Self {
        Self {
            config: WalkerConfig::default(),
        }
    }

    pub fn with_config(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// List the immediate children of `dir`.
    ///
    /// Any failure to read the directory or an entry's metadata aborts the
    /// listing; entries are never silently skipped.
    pub fn list(&self, dir: &Path) -> Result<Vec<Entry>, ScanError> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.config.follow_symlinks);

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf());
                ScanError::Io {
                    path,
                    source: e.into(),
                }
            })?;

            let name = entry.file_name().to_string_lossy().to_string();
            if self.should_ignore(&name) {
                continue;
            }

            let path = entry.path().to_path_buf();

            if entry.file_type().is_dir() {
                entries.push(Entry::Directory { path, name });
            } else {
                // Follows symlinks, so a link's size and mtime are the
                // target's. A broken link fails the scan here.
                let metadata =
                    std::fs::metadata(&path).map_err(|e| ScanError::io(path.clone(), e))?;
                let modified = metadata
                    .modified()
                    .map_err(|e| ScanError::io(path.clone(), e))?;
                entries.push(Entry::File {
                    path,
                    name,
                    size: metadata.len(),
                    modified: modified.into(),
                });
            }
        }

        Ok(entries)
    }

    fn should_ignore(&self, name: &str) -> bool {
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| pattern == name)
    }
}
