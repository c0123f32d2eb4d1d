//! Property tests for tree construction and navigation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use picktest::{TestPath, TestSet};

use crate::strategies;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every path lists exactly the union of its children's items.
    #[test]
    fn property_items_are_union_of_children(tree in strategies::tree()) {
        let root: Vec<usize> = tree.item_indices(&TestPath::root()).unwrap().to_vec();
        prop_assert_eq!(root, (0..tree.len()).collect::<Vec<_>>());

        for path in tree.paths() {
            let children = tree.children(path);
            if children.is_empty() {
                prop_assert!(tree.node(path).unwrap().is_leaf() || tree.is_empty());
                continue;
            }

            let own: BTreeSet<usize> = tree.item_indices(path).unwrap().iter().copied().collect();
            let union: BTreeSet<usize> = children
                .iter()
                .flat_map(|child| tree.item_indices(child).unwrap().iter().copied())
                .collect();
            prop_assert_eq!(own, union, "at {}", path);
        }
    }

    /// PROPERTY: every proper prefix of an item's path is registered.
    #[test]
    fn property_prefixes_are_registered(tree in strategies::tree()) {
        for idx in 0..tree.len() {
            let path = tree.item_path(idx).unwrap();
            for prefix in path.prefixes() {
                prop_assert!(tree.contains(&prefix), "{} missing", prefix);
                prop_assert!(tree.item_indices(&prefix).unwrap().contains(&idx));
            }
        }
    }

    /// PROPERTY: `child(name).parent()` returns to the starting path.
    #[test]
    fn property_child_then_parent_round_trips(tree in strategies::tree()) {
        for path in tree.paths().filter(|p| !p.is_root()) {
            let parent = TestSet::at(&tree, path.parent()).unwrap();
            let child = parent.child(path.last()).unwrap();

            prop_assert_eq!(child.path(), path);
            prop_assert_eq!(child.parent(), parent);
        }
    }

    /// PROPERTY: listed children are exactly the registered child paths.
    #[test]
    fn property_list_children_matches_tree(tree in strategies::tree()) {
        for path in tree.paths() {
            let set = TestSet::at(&tree, path.clone()).unwrap();
            let listed: BTreeSet<TestPath> =
                set.list_children().iter().map(|c| c.path().clone()).collect();
            let expected: BTreeSet<TestPath> = tree.children(path).iter().cloned().collect();
            prop_assert_eq!(listed, expected);
        }
    }
}
