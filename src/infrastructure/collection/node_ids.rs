//! Node id list source
//!
//! One node id per line. Blank lines and `#` comments are ignored, as are
//! the summary lines pytest prints after `--collect-only -q`.

use std::path::PathBuf;

use tracing::{debug, warn};

use super::read_source;
use crate::domain::entities::Item;
use crate::domain::ports::{CollectionError, CollectionSource};

pub struct NodeIdListSource {
    path: PathBuf,
}

impl NodeIdListSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse list content; `path` is only used in errors
    pub fn parse(content: &str, path: &std::path::Path) -> Result<Vec<Item>, CollectionError> {
        let mut items = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if !line.contains("::") {
                if is_summary_line(line) {
                    debug!(line, "skipping collection summary");
                } else {
                    warn!(line = line_no + 1, text = line, "skipping line without a test function");
                }
                continue;
            }

            let item = Item::from_node_id(line).map_err(|e| CollectionError::InvalidEntry {
                path: path.to_path_buf(),
                entry: line_no + 1,
                message: e.to_string(),
            })?;
            items.push(item);
        }

        Ok(items)
    }
}

impl CollectionSource for NodeIdListSource {
    fn collect(&self) -> Result<Vec<Item>, CollectionError> {
        let content = read_source(&self.path)?;
        Self::parse(&content, &self.path)
    }

    fn describe(&self) -> String {
        format!("node id list {}", self.path.display())
    }
}

fn is_summary_line(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.contains(" collected")
        || lower.contains("no tests ran")
        || lower.starts_with('=')
        || lower.starts_with("warning")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn parses_collect_only_output() {
        let content = "\
pkg/mod_a.py::test_x[1]
pkg/mod_a.py::test_x[2]
pkg/mod_b.py::TestCls::test_y

3 tests collected in 0.02s
";
        let items = NodeIdListSource::parse(content, Path::new("-")).unwrap();

        let ids: Vec<&str> = items.iter().map(Item::node_id).collect();
        assert_eq!(
            ids,
            vec![
                "pkg/mod_a.py::test_x[1]",
                "pkg/mod_a.py::test_x[2]",
                "pkg/mod_b.py::TestCls::test_y"
            ]
        );
    }

    #[test]
    fn ignores_comments_and_blank_lines() {
        let content = "# smoke tests\n\n  t.py::test_a  \n";
        let items = NodeIdListSource::parse(content, Path::new("list.txt")).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].node_id(), "t.py::test_a");
    }

    #[test]
    fn malformed_id_reports_line() {
        let content = "t.py::test_a\nt.py::\n";
        let err = NodeIdListSource::parse(content, Path::new("list.txt")).unwrap_err();

        assert!(matches!(err, CollectionError::InvalidEntry { entry: 2, .. }));
    }
}
