//! Snapshot command handler
//!
//! Lists, shows and deletes saved selections without collecting tests.

use anyhow::Result;
use serde_json::json;

use picktest::config::Config;
use picktest::PicktestError;

use crate::cli::SnapshotAction;
use crate::commands::collection::snapshot_repository;
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::output::note;
use crate::ui::theme::Icon;
use crate::ui::views::snapshots::SnapshotsView;

pub fn cmd_snapshot(action: &SnapshotAction, config: &Config, ui: &UiContext) -> Result<()> {
    let repository = snapshot_repository(config);

    match action {
        SnapshotAction::List => {
            let snapshots = repository.list().map_err(PicktestError::from)?;
            if ui.json {
                for snapshot in &snapshots {
                    json::emit(json!({
                        "event": "snapshot",
                        "name": snapshot.name,
                        "count": snapshot.node_ids.len(),
                        "saved_at": snapshot.saved_at,
                    }))?;
                }
            } else {
                print!("{}", SnapshotsView::new(&snapshots).render(ui.color));
            }
        }
        SnapshotAction::Show { name } => {
            let snapshot = repository
                .get(name)
                .map_err(PicktestError::from)?
                .ok_or_else(|| PicktestError::SnapshotNotFound { name: name.clone() })?;
            for (index, node_id) in snapshot.node_ids.iter().enumerate() {
                if ui.json {
                    json::emit(json!({ "event": "test", "index": index, "node_id": node_id }))?;
                } else {
                    println!("{}", node_id);
                }
            }
        }
        SnapshotAction::Delete { name } => {
            if !repository.delete(name).map_err(PicktestError::from)? {
                return Err(PicktestError::SnapshotNotFound { name: name.clone() }.into());
            }
            if ui.json {
                json::emit(json!({ "event": "deleted", "name": name }))?;
            } else {
                note(ui, Icon::Success, &format!("Deleted '{}'", name));
            }
        }
    }
    Ok(())
}
