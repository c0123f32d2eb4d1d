//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod collection_source;
pub mod execution_sink;
pub mod snapshot_repository;

pub use collection_source::{CollectionError, CollectionSource};
pub use execution_sink::{ExecutionSink, SinkError};
pub use snapshot_repository::{SnapshotError, SnapshotRepository};
