//! Shared command plumbing: finding the collection, building the tree and
//! opening the snapshot store.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::debug;

use picktest::config::{Config, PROJECT_CONFIG_FILE};
use picktest::domain::ports::SnapshotRepository;
use picktest::infrastructure::{open_source, TomlSnapshotRepository};
use picktest::{Expression, PathTree, PicktestError, PicktestResult, TestSet};

use crate::cli::SourceArgs;

/// Collect items from the CLI source (or the configured one) and index them
pub fn load_tree(args: &SourceArgs, config: &Config) -> Result<PathTree> {
    let path = args
        .source
        .clone()
        .or_else(|| config.collection.source.clone())
        .ok_or_else(|| {
            anyhow!(
                "no test collection given; pass --source or set [collection] source in {}",
                PROJECT_CONFIG_FILE
            )
        })?;
    let format = args.format.unwrap_or(config.collection.format);

    let source = open_source(path, format);
    debug!(source = %source.describe(), "collecting tests");
    let items = source.collect().map_err(PicktestError::from)?;
    Ok(PathTree::build(items)?)
}

/// Resolve `expr` against the root; no expression means the root itself
pub fn resolve<'t>(tree: &'t PathTree, expr: Option<&str>) -> PicktestResult<TestSet<'t>> {
    match expr {
        Some(expr) => Expression::parse(expr)?.resolve(&tree.root()),
        None => Ok(tree.root()),
    }
}

pub fn snapshot_repository(config: &Config) -> Arc<dyn SnapshotRepository> {
    Arc::new(TomlSnapshotRepository::with_path(config.snapshots_path()))
}
