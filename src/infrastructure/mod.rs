//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `collection/` - Collection sources (JSON manifest, node id list)
//! - `repositories/` - Snapshot repository (TOML)
//! - `sinks/` - Execution sinks (stdout, test command)

pub mod collection;
pub mod repositories;
pub mod sinks;

// Re-export for convenience
pub use collection::{open_source, JsonManifestSource, NodeIdListSource};
pub use repositories::TomlSnapshotRepository;
pub use sinks::{CommandSink, PlanFormat, StdoutSink};
