//! Tree command handler
//!
//! Prints the hierarchy below an expression.

use anyhow::Result;
use serde_json::json;

use picktest::config::Config;

use crate::cli::SourceArgs;
use crate::commands::collection::{load_tree, resolve};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::tree::TreeView;

pub fn cmd_tree(
    source: &SourceArgs,
    expr: Option<&str>,
    depth: Option<usize>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let tree = load_tree(source, config)?;
    let set = resolve(&tree, expr)?;
    let view = TreeView::new(set.clone(), depth);

    if ui.json {
        json::emit(json!({
            "event": "tree",
            "path": set.path().to_string(),
            "expr": set.to_string(),
            "count": set.len(),
        }))?;
        for row in view.rows() {
            json::emit(json!({
                "event": "node",
                "path": row.path.to_string(),
                "name": row.name(),
                "kind": row.kind.as_str(),
                "depth": row.depth(),
                "count": row.count,
            }))?;
        }
        return Ok(());
    }

    print!("{}", view.render(ui.color, ui.unicode));
    Ok(())
}
