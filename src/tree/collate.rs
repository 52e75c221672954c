//! Pinned name collation for manifest ordering.
//!
//! The ordering never consults the host locale: names are normalized to NFC
//! and compared case-insensitively by Unicode lowercase mapping, with a
//! case-sensitive codepoint comparison as tie-break so the order is total.

use crate::tree::node::TreeNode;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Compare two entry names under the pinned collation.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let a_nfc: String = a.nfc().collect();
    let b_nfc: String = b.nfc().collect();

    let folded = a_nfc
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b_nfc.chars().flat_map(char::to_lowercase));

    match folded {
        Ordering::Equal => a_nfc.cmp(&b_nfc),
        other => other,
    }
}

/// Order manifest nodes: directories before files, then by name.
pub fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    match (a.is_directory(), b.is_directory()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(a.name(), b.name()),
    }
}
