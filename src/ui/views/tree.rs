//! Tree view
//!
//! Renders the children of a test set as an indented tree:
//!
//! ```text
//! t (3 tests)
//! |-- TestBoth (class, 2)
//! |   `-- test_m (params, 2)
//! `-- test_a
//! ```
//!
//! Only branches that still hold effective items of the starting set are
//! shown, and their counts are restricted to those items.

use std::collections::HashSet;

use picktest::domain::entities::NodeKind;
use picktest::domain::services::TestSet;
use picktest::TestPath;

use crate::ui::theme::{paint, Branches, SemanticColor};
use crate::ui::views::count_label;

/// One rendered line below the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: TestPath,
    pub kind: NodeKind,
    /// Effective items of the starting set under this row
    pub count: usize,
    /// One entry per enclosing level: whether that ancestor was the last child
    pub guides: Vec<bool>,
    pub last: bool,
}

impl TreeRow {
    pub fn depth(&self) -> usize {
        self.guides.len() + 1
    }

    pub fn name(&self) -> &str {
        self.path.last()
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Item
    }
}

pub struct TreeView<'t> {
    root: TestSet<'t>,
    max_depth: Option<usize>,
}

impl<'t> TreeView<'t> {
    pub fn new(root: TestSet<'t>, max_depth: Option<usize>) -> Self {
        Self { root, max_depth }
    }

    /// Rows in display order (pre-order, children sorted by name)
    pub fn rows(&self) -> Vec<TreeRow> {
        let keep: HashSet<usize> = self.root.effective_indices().into_iter().collect();
        let mut rows = Vec::new();
        self.collect(&self.root, &keep, &mut Vec::new(), &mut rows);
        rows
    }

    fn collect(
        &self,
        set: &TestSet<'t>,
        keep: &HashSet<usize>,
        guides: &mut Vec<bool>,
        rows: &mut Vec<TreeRow>,
    ) {
        if self.max_depth.is_some_and(|max| guides.len() >= max) {
            return;
        }

        let children: Vec<(TestSet<'t>, usize)> = set
            .list_children()
            .into_iter()
            .map(|child| {
                let count = child
                    .effective_indices()
                    .iter()
                    .filter(|idx| keep.contains(idx))
                    .count();
                (child, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        let n = children.len();
        for (i, (child, count)) in children.into_iter().enumerate() {
            let last = i + 1 == n;
            rows.push(TreeRow {
                path: child.path().clone(),
                kind: child.node().kind(),
                count,
                guides: guides.clone(),
                last,
            });

            if !child.node().is_leaf() {
                guides.push(last);
                self.collect(&child, keep, guides, rows);
                guides.pop();
            }
        }
    }

    pub fn render(&self, color: bool, unicode: bool) -> String {
        let branches = Branches::new(unicode);
        let mut out = format!(
            "{} {}\n",
            self.root,
            paint(
                &format!("({})", count_label(self.root.len())),
                SemanticColor::Dim,
                color
            )
        );

        for row in self.rows() {
            for &ancestor_last in &row.guides {
                out.push_str(if ancestor_last {
                    branches.blank
                } else {
                    branches.pipe
                });
            }
            out.push_str(if row.last {
                branches.elbow
            } else {
                branches.tee
            });

            if row.is_leaf() {
                out.push_str(row.name());
            } else {
                out.push_str(&paint(row.name(), SemanticColor::Info, color));
                out.push(' ');
                out.push_str(&paint(
                    &format!("({}, {})", row.kind.as_str(), row.count),
                    SemanticColor::Dim,
                    color,
                ));
            }
            out.push('\n');
        }
        out
    }
}
