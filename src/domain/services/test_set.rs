//! Test set
//!
//! Immutable cursor over a [`PathTree`]: a path, parameter filters and at
//! most one index or slice. Every navigation step returns a new value; the
//! tree itself is only borrowed.
//!
//! Effective items are the items under the path carrying ALL filter
//! identifiers, then narrowed by the index or slice. A new index or slice
//! replaces the previous one.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use super::path_tree::PathTree;
use crate::domain::entities::{Item, Node, SelectionSet};
use crate::domain::value_objects::{sanitize_param_id, IndexSpec, SliceSpec, TestPath};
use crate::error::{PicktestError, PicktestResult};

#[derive(Debug, Clone)]
pub struct TestSet<'t> {
    tree: &'t PathTree,
    path: TestPath,
    node: &'t Node,
    indices: &'t [usize],
    /// Sanitized parameter identifiers, all required
    filters: Vec<String>,
    /// Applied after filtering
    index: Option<IndexSpec>,
}

static ROOT_NODE: Node = Node::Root;

impl PathTree {
    /// Cursor over the whole tree
    pub fn root(&self) -> TestSet<'_> {
        let path = TestPath::root();
        TestSet {
            tree: self,
            node: self.node(&path).unwrap_or(&ROOT_NODE),
            indices: self.item_indices(&path).unwrap_or(&[]),
            path,
            filters: Vec::new(),
            index: None,
        }
    }
}

impl<'t> TestSet<'t> {
    /// Cursor at `path` with no filters
    pub fn at(tree: &'t PathTree, path: TestPath) -> PicktestResult<Self> {
        Self::with_filters(tree, path, Vec::new())
    }

    fn with_filters(tree: &'t PathTree, path: TestPath, filters: Vec<String>) -> PicktestResult<Self> {
        let node = tree.node(&path)?;
        let indices = tree.item_indices(&path)?;
        Ok(Self {
            tree,
            path,
            node,
            indices,
            filters,
            index: None,
        })
    }

    pub fn tree(&self) -> &'t PathTree {
        self.tree
    }

    pub fn path(&self) -> &TestPath {
        &self.path
    }

    pub fn node(&self) -> &'t Node {
        self.node
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn index(&self) -> Option<IndexSpec> {
        self.index
    }

    /// Navigate to a named child.
    ///
    /// Under a parametrized group the raw instance id (`1`, `a-dog`) is
    /// accepted as well as its sanitized form. Children with nothing left
    /// after filtering are not found.
    pub fn child(&self, name: &str) -> PicktestResult<TestSet<'t>> {
        let mut path = self.path.join(name);
        if !self.tree.contains(&path) && self.node.as_group().is_some() {
            path = self.path.join(sanitize_param_id(name));
        }
        if !self.tree.contains(&path) {
            return Err(self.not_found(name));
        }

        let child = Self::with_filters(self.tree, path, self.filters.clone())?;
        let effective: HashSet<usize> = self.effective_indices().into_iter().collect();
        if child.filtered_indices().iter().any(|idx| effective.contains(idx)) {
            Ok(child)
        } else {
            Err(self.not_found(name))
        }
    }

    /// Enclosing set, with filters and index dropped. The root is its own
    /// parent.
    pub fn parent(&self) -> TestSet<'t> {
        Self::at(self.tree, self.path.parent()).unwrap_or_else(|_| self.tree.root())
    }

    /// Narrow to one filtered item, replacing any index or slice already
    /// applied. Negative indices count from the end.
    pub fn by_index(&self, index: isize) -> PicktestResult<TestSet<'t>> {
        IndexSpec::Index(index).apply(self.filtered_indices().len())?;
        Ok(self.with_index(IndexSpec::Index(index)))
    }

    /// Narrow to a slice of the filtered items, replacing any index or slice
    /// already applied. Out-of-range bounds give an empty set; a zero step is
    /// rejected.
    pub fn by_slice(&self, slice: SliceSpec) -> PicktestResult<TestSet<'t>> {
        slice.indices(self.filtered_indices().len())?;
        Ok(self.with_index(IndexSpec::Slice(slice)))
    }

    /// Apply an index or slice
    pub fn by_spec(&self, spec: IndexSpec) -> PicktestResult<TestSet<'t>> {
        match spec {
            IndexSpec::Index(index) => self.by_index(index),
            IndexSpec::Slice(slice) => self.by_slice(slice),
        }
    }

    /// Keep only items carrying `ident` (in addition to existing filters)
    pub fn by_param(&self, ident: &str) -> PicktestResult<TestSet<'t>> {
        let ident = sanitize_param_id(ident);
        if !self.effective_items().iter().any(|item| item.has_param(&ident)) {
            return Err(PicktestError::UnknownParam {
                path: self.path.to_string(),
                ident,
            });
        }

        let mut next = self.clone();
        if !next.filters.contains(&ident) {
            next.filters.push(ident);
        }
        Ok(next)
    }

    /// Children that still hold effective items, ordered by name
    pub fn list_children(&self) -> Vec<TestSet<'t>> {
        let effective: HashSet<usize> = self.effective_indices().into_iter().collect();
        self.tree
            .sorted_children(&self.path)
            .into_iter()
            .filter_map(|path| Self::with_filters(self.tree, path.clone(), self.filters.clone()).ok())
            .filter(|child| {
                child
                    .filtered_indices()
                    .iter()
                    .any(|idx| effective.contains(idx))
            })
            .collect()
    }

    /// Item indices after filters and the index or slice
    pub fn effective_indices(&self) -> Vec<usize> {
        let indices = self.filtered_indices();
        let slice = match self.index {
            None => return indices,
            Some(IndexSpec::Index(index)) => IndexSpec::index_as_slice(index),
            Some(IndexSpec::Slice(slice)) => slice,
        };
        // zero steps are rejected before a slice is stored
        slice
            .indices(indices.len())
            .unwrap_or_default()
            .into_iter()
            .filter_map(|pos| indices.get(pos).copied())
            .collect()
    }

    pub fn effective_items(&self) -> Vec<&'t Item> {
        let tree = self.tree;
        self.effective_indices()
            .into_iter()
            .filter_map(|idx| tree.item(idx))
            .collect()
    }

    /// Parameter identifiers carried by the effective items
    pub fn params(&self) -> BTreeSet<String> {
        self.effective_items()
            .into_iter()
            .flat_map(Item::param_idents)
            .collect()
    }

    /// Add the effective items to `selection`; returns how many were new
    pub fn select(&self, selection: &mut SelectionSet) -> usize {
        selection.add_all(self.effective_items())
    }

    pub fn len(&self) -> usize {
        self.effective_indices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn filtered_indices(&self) -> Vec<usize> {
        self.indices
            .iter()
            .copied()
            .filter(|&idx| {
                self.filters.is_empty()
                    || self
                        .tree
                        .item(idx)
                        .is_some_and(|item| self.filters.iter().all(|f| item.has_param(f)))
            })
            .collect()
    }

    fn with_index(&self, index: IndexSpec) -> TestSet<'t> {
        let mut next = self.clone();
        next.index = Some(index);
        next
    }

    fn not_found(&self, name: &str) -> PicktestError {
        PicktestError::NotFound {
            path: self.path.to_string(),
            name: name.to_string(),
        }
    }
}

impl PartialEq for TestSet<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree)
            && self.path == other.path
            && self.filters == other.filters
            && self.index == other.index
    }
}

impl fmt::Display for TestSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for filter in &self.filters {
            write!(f, "@{}", filter)?;
        }
        if let Some(index) = &self.index {
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}
