//! Selection session
//!
//! Owns the tree and the selection for one session. Every command either
//! succeeds completely or leaves the selection as it was.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{ExecutionPlan, Item, SelectionSet, Snapshot};
use crate::domain::ports::{SnapshotError, SnapshotRepository};
use crate::domain::services::{Expression, PathTree, TestSet};
use crate::domain::value_objects::IndexSpec;
use crate::error::{PicktestError, PicktestResult};

/// Delimiter of the positional form accepted by [`SelectionSession::remove`]
pub const REMOVE_DELIMITER: char = ',';

/// How the user left the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Run the selection
    Confirmed,
    /// Run nothing
    Aborted,
}

pub struct SelectionSession {
    tree: PathTree,
    selection: SelectionSet,
    snapshots: Option<Arc<dyn SnapshotRepository>>,
    touched: bool,
}

impl SelectionSession {
    pub fn new(tree: PathTree) -> Self {
        Self {
            tree,
            selection: SelectionSet::new(),
            snapshots: None,
            touched: false,
        }
    }

    pub fn with_snapshots(mut self, repository: Arc<dyn SnapshotRepository>) -> Self {
        self.snapshots = Some(repository);
        self
    }

    pub fn tree(&self) -> &PathTree {
        &self.tree
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Whether any command has modified the selection
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Resolve an expression against the root of the tree
    pub fn resolve(&self, expr: &str) -> PicktestResult<TestSet<'_>> {
        Expression::parse(expr)?.resolve(&self.tree.root())
    }

    /// Add the effective items of `expr`; returns how many were new.
    pub fn add(&mut self, expr: &str) -> PicktestResult<usize> {
        let set = Expression::parse(expr)?.resolve(&self.tree.root())?;
        let added = set.select(&mut self.selection);
        self.touched = true;
        debug!(expr, added, total = self.selection.len(), "added tests");
        Ok(added)
    }

    /// Drop the effective items of `expr` from the selection
    pub fn exclude(&mut self, expr: &str) -> PicktestResult<usize> {
        let set = Expression::parse(expr)?.resolve(&self.tree.root())?;
        let removed = self.selection.remove_all(set.effective_items());
        self.touched = true;
        debug!(expr, removed, total = self.selection.len(), "excluded tests");
        Ok(removed)
    }

    /// Remove by position.
    ///
    /// No spec (or an empty one) clears everything; otherwise `spec` is an
    /// index (`-1`) or a comma slice (`1,` for `[1:]`, `,,-3` for `[::-3]`).
    pub fn remove(&mut self, spec: Option<&str>) -> PicktestResult<usize> {
        if self.selection.is_empty() {
            return Err(PicktestError::EmptySelection);
        }

        let spec = spec.map(str::trim).filter(|s| !s.is_empty());
        let removed = match spec {
            None => self.clear(),
            Some(text) => {
                let range = IndexSpec::parse_delimited(text, REMOVE_DELIMITER)?;
                self.selection.remove_range(&range)?
            }
        };
        self.touched = true;
        Ok(removed)
    }

    /// Empty the selection; returns how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.selection.len();
        self.selection.clear();
        self.touched = true;
        count
    }

    /// The current selection, in order
    pub fn show(&self) -> PicktestResult<&[Item]> {
        if self.selection.is_empty() {
            return Err(PicktestError::EmptySelection);
        }
        Ok(self.selection.as_ordered_list())
    }

    /// Store the current selection under `name`
    pub fn save_snapshot(&self, name: &str) -> PicktestResult<usize> {
        let ids: Vec<String> = self.selection.ids().map(str::to_string).collect();
        let count = ids.len();
        self.repository()?.set(name, ids)?;
        debug!(name, count, "saved selection");
        Ok(count)
    }

    /// Add the tests stored under `name`.
    ///
    /// Ids no longer present in the collection are skipped.
    pub fn load_snapshot(&mut self, name: &str) -> PicktestResult<usize> {
        let snapshot = self
            .repository()?
            .get(name)?
            .ok_or_else(|| PicktestError::SnapshotNotFound {
                name: name.to_string(),
            })?;

        let mut items = Vec::with_capacity(snapshot.node_ids.len());
        for id in &snapshot.node_ids {
            match self.tree.item_by_id(id) {
                Some(item) => items.push(item),
                None => debug!(name, node_id = %id, "dropping stale id from saved selection"),
            }
        }

        let added = self.selection.add_all(items);
        self.touched = true;
        Ok(added)
    }

    pub fn delete_snapshot(&self, name: &str) -> PicktestResult<()> {
        if self.repository()?.delete(name)? {
            Ok(())
        } else {
            Err(PicktestError::SnapshotNotFound {
                name: name.to_string(),
            })
        }
    }

    pub fn list_snapshots(&self) -> PicktestResult<Vec<Snapshot>> {
        Ok(self.repository()?.list()?)
    }

    /// Question asked before running the selection
    pub fn confirmation_prompt(&self) -> String {
        format!(
            "You have selected the above {} test(s) to be run. Would you like to run them now?",
            self.selection.len()
        )
    }

    /// End the session with an explicit answer
    pub fn finish(self, end: SessionEnd) -> ExecutionPlan {
        match end {
            SessionEnd::Confirmed => self.selection.into_plan(),
            SessionEnd::Aborted => ExecutionPlan::Selected(Vec::new()),
        }
    }

    /// End the session without asking.
    ///
    /// A session nobody touched runs everything that was collected.
    pub fn finish_untouched(self) -> ExecutionPlan {
        if self.touched {
            self.selection.into_plan()
        } else {
            ExecutionPlan::Unfiltered(self.tree.into_items())
        }
    }

    fn repository(&self) -> PicktestResult<&dyn SnapshotRepository> {
        self.snapshots.as_deref().ok_or_else(|| {
            PicktestError::Snapshot(SnapshotError::AccessError {
                message: "no snapshot store configured".to_string(),
            })
        })
    }
}
