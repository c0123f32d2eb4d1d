//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod snapshot;

pub use snapshot::{default_snapshots_path, TomlSnapshotRepository};
