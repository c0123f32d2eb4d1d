//! Property tests for index and slice boundaries.

use proptest::prelude::*;

use picktest::{IndexSpec, PicktestError, SliceSpec, TestSet};

use crate::strategies;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `[:]` leaves the effective items unchanged.
    #[test]
    fn property_full_slice_is_noop(tree in strategies::tree()) {
        for path in tree.paths() {
            let set = TestSet::at(&tree, path.clone()).unwrap();
            let sliced = set.by_slice(SliceSpec::full()).unwrap();
            prop_assert_eq!(sliced.effective_indices(), set.effective_indices());
        }
    }

    /// PROPERTY: `[-1]` is the last item and `[len]` is out of range.
    #[test]
    fn property_last_index_boundary(tree in strategies::tree()) {
        for path in tree.paths() {
            let set = TestSet::at(&tree, path.clone()).unwrap();
            let indices = set.effective_indices();
            let len = indices.len() as isize;

            match indices.last() {
                Some(last) => {
                    prop_assert_eq!(set.by_index(-1).unwrap().effective_indices(), vec![*last]);
                    prop_assert_eq!(set.by_index(-len).unwrap().effective_indices(), vec![indices[0]]);
                }
                None => prop_assert!(set.by_index(-1).is_err()),
            }

            let is_out_of_range = matches!(
                set.by_index(len),
                Err(PicktestError::IndexOutOfRange { .. })
            );
            prop_assert!(is_out_of_range);
        }
    }

    /// PROPERTY: an index and its one-element slice pick the same position.
    #[test]
    fn property_index_matches_its_slice(len in 1usize..40, raw in any::<isize>()) {
        let index = raw.rem_euclid(2 * len as isize) - len as isize;
        let direct = IndexSpec::Index(index).apply(len).unwrap();
        let sliced = IndexSpec::index_as_slice(index).indices(len).unwrap();
        prop_assert_eq!(direct, sliced);
    }

    /// PROPERTY: slices never fail on bounds and stay within the list.
    #[test]
    fn property_slices_stay_in_bounds(
        len in 0usize..40,
        start in proptest::option::of(prop_oneof![-60isize..60, any::<isize>()]),
        stop in proptest::option::of(prop_oneof![-60isize..60, any::<isize>()]),
        step in proptest::option::of(
            prop_oneof![-5isize..5, any::<isize>()].prop_filter("non-zero", |s| *s != 0)
        ),
    ) {
        let positions = SliceSpec::new(start, stop, step).indices(len).unwrap();
        prop_assert!(positions.iter().all(|&p| p < len));

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), positions.len());
    }

    /// PROPERTY: a later index replaces an earlier slice instead of narrowing it.
    #[test]
    fn property_index_replaces_slice(
        tree in strategies::tree(),
        start in proptest::option::of(-8isize..8),
        stop in proptest::option::of(-8isize..8),
    ) {
        for path in tree.paths() {
            let set = TestSet::at(&tree, path.clone()).unwrap();
            let sliced = set.by_slice(SliceSpec::new(start, stop, None)).unwrap();
            prop_assert_eq!(
                sliced.by_index(0).map(|s| s.effective_indices()).ok(),
                set.by_index(0).map(|s| s.effective_indices()).ok()
            );
        }
    }

    /// PROPERTY: `[::-1]` reverses `[:]`.
    #[test]
    fn property_negative_step_reverses(len in 0usize..40) {
        let forward = SliceSpec::full().indices(len).unwrap();
        let mut backward = SliceSpec::new(None, None, Some(-1)).indices(len).unwrap();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }
}
