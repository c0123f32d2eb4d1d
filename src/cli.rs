use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use picktest::config::CollectionFormat;

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// picktest - navigate collected tests and pick which ones to run
#[derive(Parser, Debug)]
#[command(name = "picktest")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Expressions look like `mod_a.test_x[0:2]` or `TestBoth.test_m@a@dog`.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the collected tests come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Collection file: JSON manifest or node id list (`-` for stdin)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Collection format (auto, json, node-ids)
    #[arg(long, value_parser = parse_format)]
    pub format: Option<CollectionFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the test hierarchy under an expression
    Tree {
        #[command(flatten)]
        source: SourceArgs,

        /// Selection expression (defaults to the root)
        expr: Option<String>,

        /// Stop descending after this many levels
        #[arg(long)]
        depth: Option<usize>,
    },

    /// List the tests an expression resolves to
    Items {
        #[command(flatten)]
        source: SourceArgs,

        /// Selection expression (defaults to the root)
        expr: Option<String>,

        /// List parameter identifiers instead of tests
        #[arg(long)]
        params: bool,
    },

    /// Build a selection and hand it to the runner
    Select {
        #[command(flatten)]
        source: SourceArgs,

        /// Expressions whose tests are added, in order
        #[arg(value_name = "EXPR")]
        add: Vec<String>,

        /// Expressions whose tests are dropped after adding
        #[arg(short = 'x', long, value_name = "EXPR")]
        exclude: Vec<String>,

        /// Positions to drop from the selection (`-1`, `1,`, `,,-3`)
        #[arg(long, value_name = "SPEC", allow_hyphen_values = true)]
        remove: Vec<String>,

        /// Start from a saved selection
        #[arg(long, value_name = "NAME")]
        load: Option<String>,

        /// Save the resulting selection
        #[arg(long, value_name = "NAME")]
        save: Option<String>,

        /// Run the selection with the configured command instead of printing it
        #[arg(long)]
        run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage saved selections
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum SnapshotAction {
    /// List saved selections
    List,

    /// Show the node ids of a saved selection
    Show { name: String },

    /// Delete a saved selection
    Delete { name: String },
}

fn parse_format(value: &str) -> Result<CollectionFormat, String> {
    CollectionFormat::parse(value)
        .ok_or_else(|| format!("unknown format '{}' (expected auto, json or node-ids)", value))
}
