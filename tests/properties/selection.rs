//! Property tests for selection accumulation and parameter filters.

use std::collections::BTreeSet;

use proptest::prelude::*;

use picktest::{Item, SelectionSet, TestSet};

use crate::strategies::{self, FIRST_PARAMS, SECOND_PARAMS};

fn ids<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<String> {
    items.into_iter().map(|i| i.node_id().to_string()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: selecting the same set twice changes nothing the second time.
    #[test]
    fn property_selection_is_idempotent(
        tree in strategies::tree(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..6),
    ) {
        let paths: Vec<_> = {
            let mut all: Vec<_> = tree.paths().cloned().collect();
            all.sort();
            all
        };

        let mut selection = SelectionSet::new();
        for pick in &picks {
            let set = TestSet::at(&tree, pick.get(&paths).clone()).unwrap();
            set.select(&mut selection);
            let before = ids(selection.as_ordered_list());

            prop_assert_eq!(set.select(&mut selection), 0);
            prop_assert_eq!(ids(selection.as_ordered_list()), before);
        }

        let unique: BTreeSet<String> = ids(selection.as_ordered_list()).into_iter().collect();
        prop_assert_eq!(unique.len(), selection.len());
    }

    /// PROPERTY: stacked filters keep exactly the items carrying every identifier.
    #[test]
    fn property_filters_intersect(
        tree in strategies::tree(),
        first in prop::sample::select(FIRST_PARAMS.to_vec()),
        second in prop::sample::select(SECOND_PARAMS.to_vec()),
    ) {
        let expected: Vec<String> = ids(
            tree.all_items()
                .iter()
                .filter(|item| item.has_param(first) && item.has_param(second)),
        );

        let root = tree.root();
        let filtered = root.by_param(first).and_then(|set| set.by_param(second));
        match filtered {
            Ok(set) => {
                prop_assert_eq!(ids(set.effective_items()), expected.clone());

                let swapped = root.by_param(second).unwrap().by_param(first).unwrap();
                prop_assert_eq!(ids(swapped.effective_items()), expected);
            }
            Err(err) => {
                prop_assert!(err.is_recoverable());
                prop_assert!(expected.is_empty());
            }
        }
    }
}
