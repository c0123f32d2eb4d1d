use super::*;
use crate::domain::entities::{Ancestor, AncestorKind, NodeKind};

/// Item under `<session> → module → function`, located in `pkg/`
fn module_item(module: &str, function: &str) -> Item {
    Item::new(
        format!("pkg/{}.py::{}", module, function),
        vec![
            Ancestor::session(),
            Ancestor::new(AncestorKind::Module, module).with_location(format!("pkg/{}.py", module)),
            Ancestor::new(AncestorKind::Function, function),
        ],
    )
}

fn scenario() -> PathTree {
    PathTree::build(vec![
        module_item("mod_a", "test_x[1]"),
        module_item("mod_a", "test_x[2]"),
        module_item("mod_b", "test_y"),
    ])
    .unwrap()
}

fn path(segments: &[&str]) -> TestPath {
    TestPath::from_segments(segments.iter().copied())
}

fn ids(items: Vec<&Item>) -> Vec<&str> {
    items.into_iter().map(Item::node_id).collect()
}

#[test]
fn root_lists_every_item_in_order() {
    let tree = scenario();

    assert_eq!(tree.len(), 3);
    assert_eq!(
        ids(tree.items(&TestPath::root()).unwrap()),
        vec![
            "pkg/mod_a.py::test_x[1]",
            "pkg/mod_a.py::test_x[2]",
            "pkg/mod_b.py::test_y"
        ]
    );
}

#[test]
fn modules_are_children_of_root() {
    let tree = scenario();

    let children: Vec<String> = tree
        .sorted_children(&TestPath::root())
        .into_iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(children, vec!["mod_a", "mod_b"]);

    let module = tree.node(&path(&["mod_a"])).unwrap();
    assert_eq!(module.kind(), NodeKind::Module);
    assert_eq!(
        module.location(),
        Some(std::path::Path::new("pkg/mod_a.py"))
    );
}

#[test]
fn parametrized_instances_form_one_group() {
    let tree = scenario();

    let group_path = path(&["mod_a", "test_x"]);
    let group = tree.node(&group_path).unwrap().as_group().unwrap();

    assert_eq!(group.name(), "test_x");
    assert_eq!(group.parent(), &path(&["mod_a"]));
    assert_eq!(group.keys().collect::<Vec<_>>(), vec!["_1", "_2"]);
    assert_eq!(group.item_indices().collect::<Vec<_>>(), vec![0, 1]);

    let instance = tree.node(&path(&["mod_a", "test_x", "_2"])).unwrap();
    assert_eq!(instance, &Node::Item { name: "_2".into(), item: 1 });
    assert_eq!(tree.item_path(1), Some(&path(&["mod_a", "test_x", "_2"])));
}

#[test]
fn every_prefix_is_registered_and_lists_union_of_children() {
    let tree = PathTree::build(vec![
        Item::from_node_id("pkg/sub/t1.py::TestA::test_a[x-1]").unwrap(),
        Item::from_node_id("pkg/sub/t1.py::TestA::test_a[y-2]").unwrap(),
        Item::from_node_id("pkg/sub/t1.py::test_b").unwrap(),
        Item::from_node_id("pkg/t2.py::TestC::()::test_c").unwrap(),
    ])
    .unwrap();

    for idx in 0..tree.len() {
        let leaf = tree.item_path(idx).unwrap();
        for prefix in leaf.prefixes() {
            assert!(tree.contains(&prefix), "missing {}", prefix);
            assert!(tree.item_indices(&prefix).unwrap().contains(&idx));
        }
    }

    for p in tree.paths() {
        let children = tree.children(p);
        if children.is_empty() {
            continue;
        }
        let mut union: Vec<usize> = children
            .iter()
            .flat_map(|c| tree.item_indices(c).unwrap().iter().copied())
            .collect();
        union.sort_unstable();
        assert_eq!(union, tree.item_indices(p).unwrap(), "at {}", p);
    }
}

#[test]
fn instance_wrapper_is_not_a_segment() {
    let tree = PathTree::build(vec![
        Item::from_node_id("t2.py::TestC::()::test_c").unwrap(),
    ])
    .unwrap();

    assert_eq!(tree.item_path(0), Some(&path(&["t2", "TestC", "test_c"])));
    assert_eq!(
        tree.node(&path(&["t2", "TestC"])).unwrap().kind(),
        NodeKind::Class
    );
}

#[test]
fn colliding_sanitized_ids_keep_separate_paths() {
    let tree = PathTree::build(vec![
        Item::from_node_id("t.py::test_m[a-b]").unwrap(),
        Item::from_node_id("t.py::test_m[a_b]").unwrap(),
    ])
    .unwrap();

    let group = tree.node(&path(&["t", "test_m"])).unwrap().as_group().unwrap();
    assert_eq!(group.keys().collect::<Vec<_>>(), vec!["a_b", "a_b_2"]);
    assert_eq!(tree.item_path(1), Some(&path(&["t", "test_m", "a_b_2"])));
}

#[test]
fn empty_input_yields_root_only() {
    let tree = PathTree::build(Vec::new()).unwrap();

    assert!(tree.is_empty());
    assert_eq!(tree.paths().count(), 1);
    assert_eq!(tree.node(&TestPath::root()).unwrap(), &Node::Root);
    assert!(tree.children(&TestPath::root()).is_empty());
}

#[test]
fn malformed_chain_aborts_build() {
    let bad = Item::new(
        "t.py::test_x",
        vec![Ancestor::new(AncestorKind::Module, "t"), Ancestor::new(AncestorKind::Function, "test_x")],
    );

    let err = PathTree::build(vec![module_item("mod_a", "test_ok"), bad]).unwrap_err();
    assert!(matches!(err, PicktestError::MalformedAncestry { ref node_id, .. } if node_id == "t.py::test_x"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = PathTree::build(vec![
        module_item("mod_a", "test_x"),
        module_item("mod_a", "test_x"),
    ])
    .unwrap_err();

    assert!(matches!(err, PicktestError::DuplicateItem { .. }));
}

#[test]
fn unknown_path_is_not_found() {
    let tree = scenario();

    let err = tree.node(&path(&["mod_a", "nope"])).unwrap_err();
    assert_eq!(err.to_string(), "no test set named 'nope' under 'mod_a'");
    assert!(tree.items(&path(&["zzz"])).is_err());
}

#[test]
fn item_lookup_by_id() {
    let tree = scenario();

    assert_eq!(tree.index_of("pkg/mod_b.py::test_y"), Some(2));
    assert_eq!(tree.item_by_id("pkg/mod_b.py::test_y").unwrap().name(), "test_y");
    assert!(tree.item_by_id("pkg/mod_b.py::missing").is_none());
}
