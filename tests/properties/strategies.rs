//! Generators for collected test ids.

use std::collections::HashSet;

use proptest::prelude::*;

use picktest::{Item, PathTree};

pub const FIRST_PARAMS: &[&str] = &["a", "b", "c"];
pub const SECOND_PARAMS: &[&str] = &["x", "y"];

/// One node id. Plain and parametrized functions never share a name.
fn node_id() -> impl Strategy<Value = String> {
    let file = prop::sample::select(vec!["m1.py", "m2.py", "pkg/m3.py", "pkg/sub/m4.py"]);
    let class = prop::sample::select(vec!["", "TestA::", "TestB::", "TestA::()::"]);
    let leaf = prop_oneof![
        prop::sample::select(vec!["test_f", "test_g"]).prop_map(str::to_string),
        (
            prop::sample::select(vec!["test_p", "test_q"]),
            prop::sample::select(FIRST_PARAMS.to_vec()),
            prop::sample::select(SECOND_PARAMS.to_vec()),
        )
            .prop_map(|(func, first, second)| format!("{}[{}-{}]", func, first, second)),
    ];

    (file, class, leaf).prop_map(|(file, class, leaf)| format!("{}::{}{}", file, class, leaf))
}

/// Items in collection order, unique by node id and by tree path
pub fn items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(node_id(), 0..32).prop_map(|ids| {
        let mut seen = HashSet::new();
        ids.into_iter()
            // `TestA::()::x` and `TestA::x` resolve to the same path
            .filter(|id| seen.insert(id.replace("()::", "")))
            .map(|id| Item::from_node_id(&id).expect("generated ids are well formed"))
            .collect()
    })
}

pub fn tree() -> impl Strategy<Value = PathTree> {
    items().prop_map(|items| PathTree::build(items).expect("generated items build a tree"))
}
