//! Domain Entities
//!
//! - `Item` - a collected test and its ancestry chain
//! - `Node` - the entity registered at one tree path
//! - `ParameterizedGroup` - instances of one parametrized function
//! - `SelectionSet` - the ordered selection being accumulated
//! - `ExecutionPlan` - what gets handed to the execution sink
//! - `Snapshot` - a named, persisted selection

mod item;
mod node;
mod param_group;
mod plan;
mod selection;
mod snapshot;

pub use item::{Ancestor, AncestorKind, Item};
pub use node::{Node, NodeKind};
pub use param_group::ParameterizedGroup;
pub use plan::ExecutionPlan;
pub use selection::SelectionSet;
pub use snapshot::{Snapshot, SnapshotBook};
