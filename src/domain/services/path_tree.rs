//! Path tree
//!
//! Index from tree paths to the items under them, their child paths, and
//! the node registered for each path. Built once from a flat item list and
//! never mutated afterwards.
//!
//! Construction runs in three passes:
//!
//! 1. resolve every item's path (the first malformed chain aborts)
//! 2. group parametrized instances by enclosing path and base name
//! 3. walk every prefix of every path, recording items, edges and nodes

use std::collections::HashMap;

use tracing::{debug, warn};

use super::path_resolver::{PathResolver, ResolvedPath, SegmentKind};
use crate::domain::entities::{Item, Node, ParameterizedGroup};
use crate::domain::value_objects::TestPath;
use crate::error::{PicktestError, PicktestResult};

#[derive(Debug, Clone)]
pub struct PathTree {
    items: Vec<Item>,
    /// Resolved path of each item, parallel to `items`
    item_paths: Vec<TestPath>,
    by_id: HashMap<String, usize>,
    by_path: HashMap<TestPath, Vec<usize>>,
    /// Child paths in first-seen order
    children: HashMap<TestPath, Vec<TestPath>>,
    nodes: HashMap<TestPath, Node>,
}

impl PathTree {
    /// Build the tree from items in collection order.
    #[tracing::instrument(skip_all, fields(items = items.len()))]
    pub fn build(items: Vec<Item>) -> PicktestResult<Self> {
        let resolver = PathResolver::new();

        let mut by_id = HashMap::with_capacity(items.len());
        let mut resolved = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if by_id.insert(item.node_id().to_string(), idx).is_some() {
                return Err(PicktestError::DuplicateItem {
                    node_id: item.node_id().to_string(),
                });
            }
            resolved.push(resolver.resolve(item)?);
        }

        let mut groups = group_instances(&mut resolved);
        let group_count = groups.len();

        let root = TestPath::root();
        let mut by_path: HashMap<TestPath, Vec<usize>> = HashMap::new();
        let mut children: HashMap<TestPath, Vec<TestPath>> = HashMap::new();
        let mut nodes = HashMap::new();
        by_path.insert(root.clone(), Vec::with_capacity(items.len()));
        children.insert(root.clone(), Vec::new());
        nodes.insert(root.clone(), Node::Root);

        let mut item_paths = Vec::with_capacity(items.len());
        for (idx, resolved_path) in resolved.iter().enumerate() {
            let mut path = root.clone();
            push_index(by_path.entry(path.clone()).or_default(), idx);

            for segment in &resolved_path.segments()[1..] {
                let child = path.join(&segment.name);

                if let Some(existing) = nodes.get(&child) {
                    if existing.is_leaf() {
                        warn!(
                            path = %child,
                            node_id = items[idx].node_id(),
                            "test shares its path with an earlier test"
                        );
                    }
                } else {
                    let node = match &segment.kind {
                        SegmentKind::Root => Node::Root,
                        SegmentKind::Package { location } => Node::Package {
                            name: segment.name.clone(),
                            location: location.clone(),
                        },
                        SegmentKind::Module { location } => Node::Module {
                            name: segment.name.clone(),
                            location: location.clone(),
                        },
                        SegmentKind::Class => Node::Class {
                            name: segment.name.clone(),
                        },
                        SegmentKind::ParamGroup => Node::ParameterizedGroup(
                            groups
                                .remove(&child)
                                .unwrap_or_else(|| ParameterizedGroup::new(path.clone(), &segment.name)),
                        ),
                        SegmentKind::Function | SegmentKind::Instance => Node::Item {
                            name: segment.name.clone(),
                            item: idx,
                        },
                    };
                    nodes.insert(child.clone(), node);
                    children
                        .entry(path.clone())
                        .or_default()
                        .push(child.clone());
                    children.entry(child.clone()).or_default();
                }

                push_index(by_path.entry(child.clone()).or_default(), idx);
                path = child;
            }

            item_paths.push(path);
        }

        debug!(
            items = items.len(),
            paths = nodes.len(),
            groups = group_count,
            "built test tree"
        );

        Ok(Self {
            items,
            item_paths,
            by_id,
            by_path,
            children,
            nodes,
        })
    }

    /// Every collected item, in collection order
    pub fn all_items(&self) -> &[Item] {
        &self.items
    }

    /// Consume the tree, returning the collected items
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Tree path of the item at `index`
    pub fn item_path(&self, index: usize) -> Option<&TestPath> {
        self.item_paths.get(index)
    }

    pub fn item_by_id(&self, node_id: &str) -> Option<&Item> {
        self.index_of(node_id).map(|idx| &self.items[idx])
    }

    pub fn index_of(&self, node_id: &str) -> Option<usize> {
        self.by_id.get(node_id).copied()
    }

    /// Indices of the items under `path`, in collection order
    pub fn item_indices(&self, path: &TestPath) -> PicktestResult<&[usize]> {
        self.by_path
            .get(path)
            .map(Vec::as_slice)
            .ok_or_else(|| not_found(path))
    }

    /// Items under `path`, in collection order
    pub fn items(&self, path: &TestPath) -> PicktestResult<Vec<&Item>> {
        Ok(self
            .item_indices(path)?
            .iter()
            .map(|&idx| &self.items[idx])
            .collect())
    }

    /// Child paths in first-seen order; empty for leaves and unknown paths
    pub fn children(&self, path: &TestPath) -> &[TestPath] {
        self.children.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Child paths ordered by their last segment
    pub fn sorted_children(&self, path: &TestPath) -> Vec<&TestPath> {
        let mut children: Vec<&TestPath> = self.children(path).iter().collect();
        children.sort_by(|a, b| a.last().cmp(b.last()));
        children
    }

    pub fn node(&self, path: &TestPath) -> PicktestResult<&Node> {
        self.nodes.get(path).ok_or_else(|| not_found(path))
    }

    pub fn contains(&self, path: &TestPath) -> bool {
        self.nodes.contains_key(path)
    }

    /// Every registered path, in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &TestPath> {
        self.nodes.keys()
    }

    /// Number of collected items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Group parametrized instances by their group path.
///
/// Instances whose sanitized ids collide within a group are renamed to the
/// key the group handed out.
fn group_instances(resolved: &mut [ResolvedPath]) -> HashMap<TestPath, ParameterizedGroup> {
    let mut groups: HashMap<TestPath, ParameterizedGroup> = HashMap::new();

    for (idx, resolved_path) in resolved.iter_mut().enumerate() {
        if !resolved_path.is_parametrized() {
            continue;
        }
        let instance_path = resolved_path.path();
        let group_path = instance_path.parent();
        let group = groups
            .entry(group_path.clone())
            .or_insert_with(|| ParameterizedGroup::new(group_path.parent(), group_path.last()));

        let key = group.insert(instance_path.last(), idx);
        if key != instance_path.last() {
            debug!(from = instance_path.last(), to = %key, "renamed colliding parametrization id");
            resolved_path.rename_leaf(key);
        }
    }

    groups
}

fn push_index(list: &mut Vec<usize>, idx: usize) {
    if list.last() != Some(&idx) {
        list.push(idx);
    }
}

fn not_found(path: &TestPath) -> PicktestError {
    PicktestError::NotFound {
        path: path.parent().to_string(),
        name: path.last().to_string(),
    }
}

#[cfg(test)]
mod tests;
