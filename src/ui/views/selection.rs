use picktest::domain::entities::Item;

use crate::ui::theme::{paint, Icon, SemanticColor};
use crate::ui::views::count_label;

/// The selection shown before asking to run it
pub struct SelectionView<'a> {
    items: &'a [Item],
}

impl<'a> SelectionView<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        Self { items }
    }

    pub fn render(&self, color: bool, unicode: bool) -> String {
        if self.items.is_empty() {
            return format!(
                "{} {}\n",
                Icon::Pending.colored(color, unicode),
                paint("Nothing selected.", SemanticColor::Dim, color)
            );
        }

        let mut out = format!(
            "{}\n",
            paint(
                &format!("Selected {}:", count_label(self.items.len())),
                SemanticColor::Info,
                color
            )
        );
        let width = (self.items.len() - 1).to_string().len();
        for (index, item) in self.items.iter().enumerate() {
            out.push_str(&format!(
                "  {} {} {}\n",
                Icon::Selected.colored(color, unicode),
                paint(&format!("{:>width$}", index, width = width), SemanticColor::Dim, color),
                item.node_id()
            ));
        }
        out
    }
}
