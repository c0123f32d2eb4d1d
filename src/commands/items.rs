//! Items command handler
//!
//! Lists the effective tests of an expression, or the parameter
//! identifiers they carry.

use anyhow::Result;
use serde_json::json;

use picktest::config::Config;
use picktest::Item;

use crate::cli::SourceArgs;
use crate::commands::collection::{load_tree, resolve};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::items::{render_params, ItemsView};

pub fn cmd_items(
    source: &SourceArgs,
    expr: Option<&str>,
    params: bool,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let tree = load_tree(source, config)?;
    let set = resolve(&tree, expr)?;

    if params {
        let idents = set.params();
        if ui.json {
            for ident in &idents {
                json::emit(json!({ "event": "param", "ident": ident }))?;
            }
        } else {
            print!("{}", render_params(&idents, ui.color));
        }
        return Ok(());
    }

    let items: Vec<&Item> = set.effective_items();
    if ui.json {
        emit_json(&items)?;
        return Ok(());
    }

    print!("{}", ItemsView::new(&items).render(ui.color));
    Ok(())
}

fn emit_json(items: &[&Item]) -> std::io::Result<()> {
    for (index, item) in items.iter().enumerate() {
        json::emit(json!({
            "event": "item",
            "index": index,
            "node_id": item.node_id(),
            "params": item.param_idents(),
        }))?;
    }
    Ok(())
}
