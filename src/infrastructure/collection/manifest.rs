//! JSON manifest source
//!
//! Accepts either `{ "items": [...] }` or a bare array. Each entry needs a
//! `nodeid`; `ancestry` and `params` are optional. Entries without an
//! ancestry derive one from the node id.
//!
//! ```json
//! { "items": [
//!   { "nodeid": "pkg/mod_a.py::test_x[a-dog]",
//!     "ancestry": [
//!       { "kind": "session", "name": "" },
//!       { "kind": "module", "name": "pkg.mod_a", "location": "pkg/mod_a.py" },
//!       { "kind": "function", "name": "test_x[a-dog]" } ],
//!     "params": ["a", "dog"] } ] }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::read_source;
use crate::domain::entities::{Ancestor, AncestorKind, Item};
use crate::domain::ports::{CollectionError, CollectionSource};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestDoc {
    Wrapped { items: Vec<ManifestItem> },
    Bare(Vec<ManifestItem>),
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    #[serde(alias = "node_id", alias = "id")]
    nodeid: String,
    #[serde(default)]
    ancestry: Option<Vec<ManifestAncestor>>,
    #[serde(default)]
    params: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ManifestAncestor {
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    location: Option<PathBuf>,
}

pub struct JsonManifestSource {
    path: PathBuf,
}

impl JsonManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse manifest content; `path` is only used in errors
    pub fn parse(content: &str, path: &Path) -> Result<Vec<Item>, CollectionError> {
        let doc: ManifestDoc =
            serde_json::from_str(content).map_err(|e| CollectionError::InvalidManifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let entries = match doc {
            ManifestDoc::Wrapped { items } | ManifestDoc::Bare(items) => items,
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| {
                to_item(entry).map_err(|message| CollectionError::InvalidEntry {
                    path: path.to_path_buf(),
                    entry: idx + 1,
                    message,
                })
            })
            .collect()
    }
}

impl CollectionSource for JsonManifestSource {
    fn collect(&self) -> Result<Vec<Item>, CollectionError> {
        let content = read_source(&self.path)?;
        Self::parse(&content, &self.path)
    }

    fn describe(&self) -> String {
        format!("manifest {}", self.path.display())
    }
}

fn to_item(entry: ManifestItem) -> Result<Item, String> {
    if entry.nodeid.trim().is_empty() {
        return Err("empty nodeid".to_string());
    }

    let item = match entry.ancestry {
        Some(chain) => {
            let ancestry = chain
                .into_iter()
                .map(|a| {
                    let kind = AncestorKind::parse(&a.kind)
                        .ok_or_else(|| format!("unknown ancestor kind '{}'", a.kind))?;
                    let mut ancestor = Ancestor::new(kind, a.name);
                    ancestor.location = a.location;
                    Ok(ancestor)
                })
                .collect::<Result<Vec<_>, String>>()?;
            Item::new(entry.nodeid, ancestry)
        }
        None => Item::from_node_id(&entry.nodeid).map_err(|e| e.to_string())?,
    };

    Ok(match entry.params {
        Some(params) => item.with_params(params),
        None => item,
    })
}
