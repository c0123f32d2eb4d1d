//! TOML Snapshot Repository
//!
//! Persists named selections at `~/.picktest/snapshots.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Snapshot, SnapshotBook};
use crate::domain::ports::{SnapshotError, SnapshotRepository};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlSnapshot {
    name: String,
    saved_at: DateTime<Utc>,
    #[serde(default)]
    node_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlSnapshotBook {
    version: u32,
    #[serde(default)]
    snapshots: Vec<TomlSnapshot>,
}

pub struct TomlSnapshotRepository {
    path: PathBuf,
}

impl TomlSnapshotRepository {
    pub fn new() -> Self {
        Self {
            path: default_snapshots_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> Result<SnapshotBook, SnapshotError> {
        if !self.path.exists() {
            return Ok(SnapshotBook::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| SnapshotError::AccessError {
            message: e.to_string(),
        })?;

        let toml_book: TomlSnapshotBook =
            toml::from_str(&content).map_err(|e| SnapshotError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(from_toml(toml_book))
    }

    fn save_to_disk(&self, book: &SnapshotBook) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::AccessError {
                message: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(&to_toml(book)).map_err(|e| {
            SnapshotError::SerializationError {
                message: e.to_string(),
            }
        })?;

        fs::write(&self.path, content).map_err(|e| SnapshotError::AccessError {
            message: e.to_string(),
        })
    }

    /// Run `update` on the stored book while holding the lock file
    fn modify<T>(
        &self,
        update: impl FnOnce(&mut SnapshotBook) -> T,
    ) -> Result<T, SnapshotError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::AccessError {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| SnapshotError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| SnapshotError::AccessError {
                message: e.to_string(),
            })?;

        let result = self.load_from_disk().and_then(|mut book| {
            let value = update(&mut book);
            self.save_to_disk(&book).map(|_| value)
        });

        let _ = lock_file.unlock();
        result
    }
}

impl Default for TomlSnapshotRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotRepository for TomlSnapshotRepository {
    fn get(&self, name: &str) -> Result<Option<Snapshot>, SnapshotError> {
        Ok(self.load_from_disk()?.get(name).cloned())
    }

    fn set(&self, name: &str, node_ids: Vec<String>) -> Result<(), SnapshotError> {
        self.modify(|book| book.upsert(Snapshot::new(name, node_ids)))
    }

    fn delete(&self, name: &str) -> Result<bool, SnapshotError> {
        self.modify(|book| book.remove(name))
    }

    fn list(&self) -> Result<Vec<Snapshot>, SnapshotError> {
        Ok(self.load_from_disk()?.snapshots)
    }
}

pub fn default_snapshots_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".picktest/snapshots.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.picktest/snapshots.toml"))
}

fn from_toml(toml_book: TomlSnapshotBook) -> SnapshotBook {
    let mut book = SnapshotBook::new();
    book.version = toml_book.version;
    book.snapshots = toml_book
        .snapshots
        .into_iter()
        .map(|s| Snapshot {
            name: s.name,
            node_ids: s.node_ids,
            saved_at: s.saved_at,
        })
        .collect();
    book
}

fn to_toml(book: &SnapshotBook) -> TomlSnapshotBook {
    TomlSnapshotBook {
        version: book.version,
        snapshots: book
            .snapshots
            .iter()
            .cloned()
            .map(|s| TomlSnapshot {
                name: s.name,
                saved_at: s.saved_at,
                node_ids: s.node_ids,
            })
            .collect(),
    }
}
