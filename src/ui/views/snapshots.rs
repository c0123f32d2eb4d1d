use unicode_width::UnicodeWidthStr;

use picktest::domain::entities::Snapshot;

use crate::ui::theme::{paint, SemanticColor};
use crate::ui::views::count_label;

pub struct SnapshotsView<'a> {
    snapshots: &'a [Snapshot],
}

impl<'a> SnapshotsView<'a> {
    pub fn new(snapshots: &'a [Snapshot]) -> Self {
        Self { snapshots }
    }

    pub fn render(&self, color: bool) -> String {
        if self.snapshots.is_empty() {
            return format!(
                "{}\n{}\n",
                paint("No saved selections.", SemanticColor::Dim, color),
                paint(
                    "Run `picktest select <EXPR>... --save <NAME>` to save one.",
                    SemanticColor::Dim,
                    color
                )
            );
        }

        let name_width = self
            .snapshots
            .iter()
            .map(|s| s.name.width())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for snapshot in self.snapshots {
            let pad = name_width - snapshot.name.width();
            out.push_str(&format!(
                "{}{}  {:>9}  {}\n",
                paint(&snapshot.name, SemanticColor::Info, color),
                " ".repeat(pad),
                count_label(snapshot.node_ids.len()),
                paint(
                    &snapshot.saved_at.format("%Y-%m-%d %H:%M").to_string(),
                    SemanticColor::Dim,
                    color
                )
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn aligns_names() {
        let saved_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let snapshots = vec![
            Snapshot {
                name: "smoke".to_string(),
                node_ids: vec!["t.py::a".to_string()],
                saved_at,
            },
            Snapshot {
                name: "regression".to_string(),
                node_ids: vec!["t.py::a".to_string(), "t.py::b".to_string()],
                saved_at,
            },
        ];

        let out = SnapshotsView::new(&snapshots).render(false);

        assert_eq!(
            out,
            "smoke          1 test  2026-03-01 09:30\n\
             regression    2 tests  2026-03-01 09:30\n"
        );
    }
}
