//! SnapshotRepository port
//!
//! Persists named selections (lists of node ids).

use std::path::PathBuf;

use crate::domain::entities::Snapshot;

pub trait SnapshotRepository: Send + Sync {
    fn get(&self, name: &str) -> Result<Option<Snapshot>, SnapshotError>;
    fn set(&self, name: &str, node_ids: Vec<String>) -> Result<(), SnapshotError>;
    /// Returns whether a snapshot was removed
    fn delete(&self, name: &str) -> Result<bool, SnapshotError>;
    fn list(&self) -> Result<Vec<Snapshot>, SnapshotError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Failed to access snapshots: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize snapshots: {message}")]
    SerializationError { message: String },

    #[error(
        "snapshot file corrupted: {path}\n  → Fix: Delete the file and save your selections again\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
