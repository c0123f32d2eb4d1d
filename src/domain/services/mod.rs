//! Domain Services
//!
//! Tree construction and navigation. No I/O; everything here works on
//! items already collected.

mod expression;
mod path_resolver;
mod path_tree;
mod test_set;

pub use expression::{Expression, Step};
pub use path_resolver::{PathResolver, ResolvedPath, Segment, SegmentKind, PACKAGE_SEPARATOR};
pub use path_tree::PathTree;
pub use test_set::TestSet;
