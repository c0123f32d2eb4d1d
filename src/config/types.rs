//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PicktestResult;
use crate::infrastructure::repositories::default_snapshots_path;

use super::loader::{self, ConfigWarning};

pub use crate::domain::value_objects::CollectionFormat;

/// Where collected tests come from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CollectionConfig {
    /// Source file (`-` for stdin); the CLI argument wins over this
    #[serde(default)]
    pub source: Option<PathBuf>,

    #[serde(default)]
    pub format: CollectionFormat,
}

/// Saved selection storage
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SnapshotsConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// How a confirmed selection is run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Test command; selected node ids are appended as arguments
    #[serde(default = "default_run_command")]
    pub command: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            command: default_run_command(),
        }
    }
}

fn default_run_command() -> String {
    "pytest -q".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub collection: CollectionConfig,

    #[serde(default)]
    pub snapshots: SnapshotsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PicktestResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PicktestResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (PICKTEST_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Snapshot file, falling back to `~/.picktest/snapshots.toml`
    pub fn snapshots_path(&self) -> PathBuf {
        self.snapshots
            .path
            .clone()
            .unwrap_or_else(default_snapshots_path)
    }
}
