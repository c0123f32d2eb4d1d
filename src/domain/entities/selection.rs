//! Selection set - the ordered, deduplicated items chosen for execution
//!
//! Adding an item that is already present is a no-op and keeps the position
//! of the first insertion. Range removals resolve their indices before
//! touching anything, so a failed call leaves the set unchanged.

use std::collections::HashSet;

use super::item::Item;
use super::plan::ExecutionPlan;
use crate::domain::value_objects::IndexSpec;
use crate::error::PicktestResult;

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    items: Vec<Item>,
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add items in order, skipping ones already selected.
    ///
    /// Returns how many were newly added.
    pub fn add_all<'a>(&mut self, items: impl IntoIterator<Item = &'a Item>) -> usize {
        let mut added = 0;
        for item in items {
            if self.ids.insert(item.node_id().to_string()) {
                self.items.push(item.clone());
                added += 1;
            }
        }
        added
    }

    /// Remove items by id; absent ones are ignored.
    ///
    /// Returns how many were removed.
    pub fn remove_all<'a>(&mut self, items: impl IntoIterator<Item = &'a Item>) -> usize {
        self.remove_ids(items.into_iter().map(Item::node_id))
    }

    /// Remove by node id; absent ids are ignored.
    pub fn remove_ids<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        let doomed: HashSet<&str> = ids
            .into_iter()
            .filter(|id| self.ids.contains(*id))
            .collect();
        if doomed.is_empty() {
            return 0;
        }

        self.items.retain(|item| !doomed.contains(item.node_id()));
        for id in &doomed {
            self.ids.remove(*id);
        }
        doomed.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }

    /// Items at the given index or slice, in slice order
    pub fn slice(&self, spec: &IndexSpec) -> PicktestResult<Vec<&Item>> {
        let positions = spec.apply(self.items.len())?;
        Ok(positions
            .into_iter()
            .filter_map(|i| self.items.get(i))
            .collect())
    }

    /// Remove the items at the given index or slice
    pub fn remove_range(&mut self, spec: &IndexSpec) -> PicktestResult<usize> {
        let doomed: Vec<String> = self
            .slice(spec)?
            .into_iter()
            .map(|item| item.node_id().to_string())
            .collect();
        Ok(self.remove_ids(doomed.iter().map(String::as_str)))
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.ids.contains(node_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Item::node_id)
    }

    /// Selected items in first-insertion order
    pub fn as_ordered_list(&self) -> &[Item] {
        &self.items
    }

    /// Consume the selection into an explicit (possibly empty) run list
    pub fn into_plan(self) -> ExecutionPlan {
        ExecutionPlan::Selected(self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
