//! picktest CLI - navigate collected tests and pick which ones to run
//!
//! Usage: picktest [--json] [--color <WHEN>] [-v] <COMMAND>
//!
//! Commands:
//!   tree      Show the test hierarchy under an expression
//!   items     List the tests an expression resolves to
//!   select    Build a selection and hand it to the runner
//!   snapshot  Manage saved selections

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use picktest::config::Config;

use cli::{Cli, Commands};
use commands::select::SelectOptions;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().ok();
    let (config, warnings) = Config::load_or_default(cwd.as_deref());
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    ui::output::print_config_warnings(&warnings, &ui);

    if let Err(err) = run(cli.command, &config, &ui) {
        ui::error::report(&err, &ui);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "picktest=info",
        2 => "picktest=debug",
        _ => "picktest=trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(command: Commands, config: &Config, ui: &UiContext) -> Result<()> {
    match command {
        Commands::Tree {
            source,
            expr,
            depth,
        } => commands::tree::cmd_tree(&source, expr.as_deref(), depth, config, ui),
        Commands::Items {
            source,
            expr,
            params,
        } => commands::items::cmd_items(&source, expr.as_deref(), params, config, ui),
        Commands::Select {
            source,
            add,
            exclude,
            remove,
            load,
            save,
            run,
            yes,
        } => {
            let options = SelectOptions {
                add,
                exclude,
                remove,
                load,
                save,
                run,
                yes,
            };
            commands::select::cmd_select(&source, &options, config, ui)
        }
        Commands::Snapshot { action } => commands::snapshot::cmd_snapshot(&action, config, ui),
    }
}
