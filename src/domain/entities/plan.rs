//! Execution plan - what the session hands to the execution sink

use super::item::Item;

/// The outcome of a selection session
///
/// `Selected(vec![])` means "run nothing" and is distinct from `Unfiltered`,
/// which keeps the collected list untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionPlan {
    /// Run every collected item in collection order
    Unfiltered(Vec<Item>),
    /// Run exactly these items, in selection order
    Selected(Vec<Item>),
}

impl ExecutionPlan {
    pub fn items(&self) -> &[Item] {
        match self {
            ExecutionPlan::Unfiltered(items) | ExecutionPlan::Selected(items) => items,
        }
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.items().iter().map(Item::node_id).collect()
    }

    pub fn is_unfiltered(&self) -> bool {
        matches!(self, ExecutionPlan::Unfiltered(_))
    }

    /// Whether nothing will run
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }
}
