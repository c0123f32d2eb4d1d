//! CollectionSource port
//!
//! Produces the flat list of collected test items the tree is built from.

use std::path::PathBuf;

use crate::domain::entities::Item;

pub trait CollectionSource {
    /// Collect every item, in collection order
    fn collect(&self) -> Result<Vec<Item>, CollectionError>;

    /// Human-readable origin, used in logs and error messages
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("failed to read collection from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid collection manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    #[error("invalid entry {entry} in {path}: {message}")]
    InvalidEntry {
        path: PathBuf,
        entry: usize,
        message: String,
    },
}
