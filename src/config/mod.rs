//! Configuration module for picktest
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PICKTEST_*)
//! 3. Project config (.picktest.toml)
//! 4. User config (~/.config/picktest/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

// Re-export CollectionFormat from domain layer
pub use crate::domain::value_objects::CollectionFormat;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    CollectionConfig, ColorMode, Config, OutputConfig, RunConfig, SnapshotsConfig, Verbosity,
};
