//! Path canonicalization and virtual path construction

use crate::error::ScanError;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize the scan root for deterministic traversal.
///
/// Resolves symlinks, `..` and `.` (via dunce, to avoid UNC paths on
/// Windows), normalizes Unicode to NFC, and requires the result to be a
/// directory.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, ScanError> {
    let canonical = dunce::canonicalize(path).map_err(|e| {
        ScanError::InvalidPath(format!("Failed to canonicalize {}: {}", path.display(), e))
    })?;

    let normalized: String = canonical.to_string_lossy().nfc().collect();
    let normalized = PathBuf::from(normalized);

    if !normalized.is_dir() {
        return Err(ScanError::InvalidPath(format!(
            "Not a directory: {}",
            normalized.display()
        )));
    }

    Ok(normalized)
}

/// Join a child name onto a reported-path prefix.
///
/// Reported paths always use forward slashes, regardless of host convention.
pub fn join_virtual(prefix: &str, name: &str) -> String {
    format!("{}/{}", prefix, name)
}

/// Normalize a configured path label to forward slashes.
pub fn to_forward_slashes(label: &str) -> String {
    label.replace('\\', "/")
}
