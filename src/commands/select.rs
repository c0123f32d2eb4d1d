//! Select command handler
//!
//! Runs one fixed batch of selection commands against a fresh session:
//! load, then add, then exclude, then remove, then save. The resulting
//! plan is printed (default) or handed to the configured test command.

use anyhow::Result;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Confirm;
use tracing::debug;

use picktest::config::Config;
use picktest::domain::ports::ExecutionSink;
use picktest::infrastructure::{CommandSink, PlanFormat, StdoutSink};
use picktest::{ExecutionPlan, PicktestError, SelectionSession, SessionEnd};

use crate::cli::SourceArgs;
use crate::commands::collection::{load_tree, snapshot_repository};
use crate::ui::context::UiContext;
use crate::ui::output::note;
use crate::ui::terminal::stdin_is_interactive;
use crate::ui::theme::Icon;
use crate::ui::views::count_label;
use crate::ui::views::selection::SelectionView;

#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    pub add: Vec<String>,
    pub exclude: Vec<String>,
    pub remove: Vec<String>,
    pub load: Option<String>,
    pub save: Option<String>,
    pub run: bool,
    pub yes: bool,
}

pub fn cmd_select(
    source: &SourceArgs,
    options: &SelectOptions,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let tree = load_tree(source, config)?;
    let mut session = SelectionSession::new(tree).with_snapshots(snapshot_repository(config));

    apply_commands(&mut session, options, ui)?;

    let plan = if session.is_touched() {
        let end = confirm(&session, options.yes, ui)?;
        session.finish(end)
    } else {
        session.finish_untouched()
    };
    debug!(
        unfiltered = plan.is_unfiltered(),
        count = plan.len(),
        "session finished"
    );

    execute(&plan, options.run, config, ui)
}

fn apply_commands(
    session: &mut SelectionSession,
    options: &SelectOptions,
    ui: &UiContext,
) -> Result<()> {
    if let Some(name) = &options.load {
        let loaded = session.load_snapshot(name)?;
        note(
            ui,
            Icon::Success,
            &format!("Loaded {} from '{}'", count_label(loaded), name),
        );
    }

    for expr in &options.add {
        session.add(expr)?;
    }
    for expr in &options.exclude {
        session.exclude(expr)?;
    }
    for spec in &options.remove {
        session.remove(Some(spec.as_str()))?;
    }

    if let Some(name) = &options.save {
        let saved = session.save_snapshot(name)?;
        note(
            ui,
            Icon::Success,
            &format!("Saved {} as '{}'", count_label(saved), name),
        );
    }
    Ok(())
}

/// Ask before running, unless told not to or nobody can answer
fn confirm(session: &SelectionSession, yes: bool, ui: &UiContext) -> Result<SessionEnd> {
    let selection = session.selection();
    let view = SelectionView::new(selection.as_ordered_list());
    if yes || ui.json || selection.is_empty() || !stdin_is_interactive() {
        if ui.verbose > 0 && !ui.quiet {
            eprint!("{}", view.render(ui.color, ui.unicode));
        }
        return Ok(SessionEnd::Confirmed);
    }

    eprint!("{}", view.render(ui.color, ui.unicode));

    let colorful = ColorfulTheme::default();
    let theme: &dyn Theme = if ui.color { &colorful } else { &SimpleTheme };
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(session.confirmation_prompt())
        .default(true)
        .interact()?;

    Ok(if confirmed {
        SessionEnd::Confirmed
    } else {
        SessionEnd::Aborted
    })
}

fn execute(plan: &ExecutionPlan, run: bool, config: &Config, ui: &UiContext) -> Result<()> {
    if run {
        if plan.is_empty() && !plan.is_unfiltered() {
            note(ui, Icon::Pending, "Nothing selected; not running.");
        }
        let mut sink =
            CommandSink::from_command_line(&config.run.command).map_err(PicktestError::from)?;
        sink.execute(plan).map_err(PicktestError::from)?;
        return Ok(());
    }

    let format = if ui.json {
        PlanFormat::Ndjson
    } else {
        PlanFormat::NodeIds
    };
    StdoutSink::new(format)
        .execute(plan)
        .map_err(PicktestError::from)?;
    Ok(())
}
