//! Collection Format Value Object
//!
//! How a collection source file is read.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Format of a collection source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionFormat {
    /// `.json` files are manifests, everything else is a node id list
    #[default]
    Auto,
    /// JSON manifest with optional ancestry chains
    Json,
    /// One node id per line
    NodeIds,
}

impl CollectionFormat {
    /// Concrete format for `path` (`Auto` decides by extension)
    pub fn resolve(self, path: &Path) -> CollectionFormat {
        match self {
            CollectionFormat::Auto => {
                if path.extension().is_some_and(|ext| ext == "json") {
                    CollectionFormat::Json
                } else {
                    CollectionFormat::NodeIds
                }
            }
            other => other,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(CollectionFormat::Auto),
            "json" | "manifest" => Some(CollectionFormat::Json),
            "node-ids" | "nodeids" | "ids" | "list" => Some(CollectionFormat::NodeIds),
            _ => None,
        }
    }
}
