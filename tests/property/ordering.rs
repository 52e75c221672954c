//! Property-based tests for manifest ordering guarantees

use canopy::tree::collate::{compare_names, compare_nodes};
use canopy::tree::node::{extension_for, DirectoryNode, FileNode, TreeNode};
use proptest::prelude::*;
use std::cmp::Ordering;

fn node(name: &str, is_dir: bool) -> TreeNode {
    if is_dir {
        TreeNode::Directory(DirectoryNode {
            name: name.to_string(),
            path: format!("Files/{}", name),
            children: vec![],
        })
    } else {
        TreeNode::File(FileNode {
            name: name.to_string(),
            path: format!("Files/{}", name),
            size: 0,
            extension: extension_for(name),
            last_modified: chrono::Utc::now(),
        })
    }
}

proptest! {
    /// Directories never follow files, and names are non-decreasing within
    /// each type group.
    #[test]
    fn sorted_levels_put_directories_first(
        entries in prop::collection::vec(("[a-zA-Z0-9._-]{1,12}", any::<bool>()), 0..32)
    ) {
        let mut nodes: Vec<TreeNode> = entries.iter().map(|(n, d)| node(n, *d)).collect();
        nodes.sort_by(compare_nodes);

        for pair in nodes.windows(2) {
            prop_assert!(!(pair[1].is_directory() && !pair[0].is_directory()));
            if pair[0].is_directory() == pair[1].is_directory() {
                prop_assert_ne!(
                    compare_names(pair[0].name(), pair[1].name()),
                    Ordering::Greater
                );
            }
        }
    }

    #[test]
    fn name_comparison_is_antisymmetric(
        a in "[a-zA-Z0-9._-]{1,12}",
        b in "[a-zA-Z0-9._-]{1,12}"
    ) {
        prop_assert_eq!(compare_names(&a, &b), compare_names(&b, &a).reverse());
    }

    #[test]
    fn sorting_is_idempotent(
        entries in prop::collection::vec(("[a-zA-Z0-9._-]{1,12}", any::<bool>()), 0..32)
    ) {
        let mut once: Vec<TreeNode> = entries.iter().map(|(n, d)| node(n, *d)).collect();
        once.sort_by(compare_nodes);
        let mut twice = once.clone();
        twice.sort_by(compare_nodes);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn extension_is_lowercase_and_dotted(name in "[a-zA-Z0-9._-]{1,12}") {
        let ext = extension_for(&name);
        prop_assert!(ext.is_empty() || ext.starts_with('.'));
        prop_assert_eq!(ext.to_lowercase(), ext);
    }
}
