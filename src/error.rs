//! Error types for picktest
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use thiserror::Error;

use crate::domain::ports::{CollectionError, SinkError, SnapshotError};

/// Result type alias for picktest operations
pub type PicktestResult<T> = Result<T, PicktestError>;

/// Main error type for picktest operations
#[derive(Error, Debug)]
pub enum PicktestError {
    /// Navigation to a child name that does not exist (or is filtered away)
    #[error("no test set named '{name}' under '{path}'")]
    NotFound { path: String, name: String },

    /// Parameter filter that no item in the current set carries
    #[error("no parametrization '{ident}' under '{path}'")]
    UnknownParam { path: String, ident: String },

    /// Integer index outside the effective item list
    #[error("index {index} out of range for {len} test(s)")]
    IndexOutOfRange { index: isize, len: usize },

    /// Slice that cannot be applied (e.g. zero step)
    #[error("invalid slice: {reason}")]
    InvalidSlice { reason: String },

    /// Selection expression that does not parse
    #[error("invalid selection expression '{expr}': {reason}")]
    InvalidExpression { expr: String, reason: String },

    /// Display/remove requested on an empty selection
    #[error("no tests selected")]
    EmptySelection,

    /// Named snapshot does not exist
    #[error("no saved selection named '{name}'")]
    SnapshotNotFound { name: String },

    /// Ancestry chain that cannot be turned into a path
    #[error("malformed ancestry for '{node_id}': {reason}")]
    MalformedAncestry { node_id: String, reason: String },

    /// Two collected items share one node id
    #[error("duplicate test id '{node_id}'")]
    DuplicateItem { node_id: String },

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig {
        file: std::path::PathBuf,
        message: String,
    },
}

impl PicktestError {
    /// Whether the session can continue after this error.
    ///
    /// Recoverable errors never leave the tree or the selection modified.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PicktestError::NotFound { .. }
                | PicktestError::UnknownParam { .. }
                | PicktestError::IndexOutOfRange { .. }
                | PicktestError::InvalidSlice { .. }
                | PicktestError::InvalidExpression { .. }
                | PicktestError::EmptySelection
                | PicktestError::SnapshotNotFound { .. }
        )
    }
}
