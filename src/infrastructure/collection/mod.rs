//! Collection sources
//!
//! Adapters that read collected test items from disk or stdin:
//! - `JsonManifestSource` - items with optional ancestry and params
//! - `NodeIdListSource` - plain node ids, e.g. `pytest --collect-only -q`

mod manifest;
mod node_ids;

use std::io::Read;
use std::path::{Path, PathBuf};

pub use manifest::JsonManifestSource;
pub use node_ids::NodeIdListSource;

use crate::domain::ports::{CollectionError, CollectionSource};
use crate::domain::value_objects::CollectionFormat;

/// Path meaning "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Open the source at `path` in the given format
pub fn open_source(path: PathBuf, format: CollectionFormat) -> Box<dyn CollectionSource> {
    match format.resolve(&path) {
        CollectionFormat::Json => Box::new(JsonManifestSource::new(path)),
        _ => Box::new(NodeIdListSource::new(path)),
    }
}

/// Read a whole source file, or stdin for `-`
fn read_source(path: &Path) -> Result<String, CollectionError> {
    let read_err = |source| CollectionError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(read_err)?;
        Ok(content)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}
