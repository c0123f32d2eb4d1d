//! picktest - hierarchical test selection
//!
//! Rebuilds the package/module/class/function hierarchy implied by a flat
//! list of collected test ids, lets callers navigate and narrow it (by
//! name, index, slice or parametrization) and accumulates a deduplicated
//! selection that is finally handed to a test runner.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{SelectionSession, SessionEnd};
pub use config::Config;
pub use domain::entities::{
    Ancestor, AncestorKind, ExecutionPlan, Item, Node, NodeKind, ParameterizedGroup, SelectionSet,
};
pub use domain::services::{Expression, PathResolver, PathTree, TestSet};
pub use domain::value_objects::{IndexSpec, SliceSpec, TestPath};
pub use error::{PicktestError, PicktestResult};
