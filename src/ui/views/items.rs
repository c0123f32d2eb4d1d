//! Item table: position, node id and parameter identifiers, aligned by
//! display width.

use unicode_width::UnicodeWidthStr;

use picktest::domain::entities::Item;

use crate::ui::theme::{paint, SemanticColor};

pub struct ItemsView<'a> {
    items: &'a [&'a Item],
}

impl<'a> ItemsView<'a> {
    pub fn new(items: &'a [&'a Item]) -> Self {
        Self { items }
    }

    pub fn render(&self, color: bool) -> String {
        if self.items.is_empty() {
            return format!("{}\n", paint("No tests.", SemanticColor::Dim, color));
        }

        let index_width = (self.items.len() - 1).to_string().len();
        let id_width = self
            .items
            .iter()
            .map(|item| item.node_id().width())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for (index, item) in self.items.iter().enumerate() {
            let index = format!("{:>width$}", index, width = index_width);
            out.push_str(&paint(&index, SemanticColor::Dim, color));
            out.push_str("  ");
            out.push_str(item.node_id());

            let params = item.param_idents();
            if !params.is_empty() {
                let pad = id_width - item.node_id().width();
                out.push_str(&" ".repeat(pad + 2));
                out.push_str(&paint(
                    &format!("@{}", params.join("@")),
                    SemanticColor::Dim,
                    color,
                ));
            }
            out.push('\n');
        }
        out
    }
}

/// Parameter identifiers, one per line
pub fn render_params<'p>(params: impl IntoIterator<Item = &'p String>, color: bool) -> String {
    let mut out = String::new();
    for ident in params {
        out.push_str(&paint("@", SemanticColor::Dim, color));
        out.push_str(ident);
        out.push('\n');
    }
    if out.is_empty() {
        out = format!("{}\n", paint("No parameters.", SemanticColor::Dim, color));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_params_by_display_width() {
        let items: Vec<Item> = ["t.py::test_é[a-dog]", "t.py::test_long[b]", "t.py::plain"]
            .iter()
            .map(|id| Item::from_node_id(id).unwrap())
            .collect();
        let refs: Vec<&Item> = items.iter().collect();

        let out = ItemsView::new(&refs).render(false);

        assert_eq!(
            out,
            "0  t.py::test_é[a-dog]  @a@dog\n\
             1  t.py::test_long[b]   @b\n\
             2  t.py::plain\n"
        );
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(ItemsView::new(&[]).render(false), "No tests.\n");
        assert_eq!(render_params(&Vec::new(), false), "No parameters.\n");
    }
}
