//! Domain Value Objects
//!
//! Immutable value types used as keys and arguments by the selection tree.

mod collection_format;
mod index_spec;
mod param_id;
mod test_path;

pub use collection_format::CollectionFormat;
pub use index_spec::{IndexSpec, SliceSpec};
pub use param_id::{param_components, sanitize_param_id, split_param_suffix};
pub use test_path::TestPath;
