//! Command runner
//!
//! Runs the configured test command (`pytest -q` by default) with the
//! selected node ids appended. An explicitly empty selection runs nothing;
//! an unfiltered plan runs the command as is.

use std::process::Command;

use tracing::{debug, info};

use crate::domain::entities::ExecutionPlan;
use crate::domain::ports::{ExecutionSink, SinkError};

#[derive(Debug, Clone)]
pub struct CommandSink {
    program: String,
    args: Vec<String>,
}

impl CommandSink {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a configured command line on whitespace
    pub fn from_command_line(line: &str) -> Result<Self, SinkError> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(SinkError::EmptyCommand)?;
        Ok(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list for `plan`, or `None` when nothing should run
    pub fn arguments(&self, plan: &ExecutionPlan) -> Option<Vec<String>> {
        match plan {
            ExecutionPlan::Selected(items) if items.is_empty() => None,
            ExecutionPlan::Unfiltered(_) => Some(self.args.clone()),
            ExecutionPlan::Selected(_) => Some(
                self.args
                    .iter()
                    .cloned()
                    .chain(plan.node_ids().into_iter().map(str::to_string))
                    .collect(),
            ),
        }
    }
}

impl ExecutionSink for CommandSink {
    fn execute(&mut self, plan: &ExecutionPlan) -> Result<(), SinkError> {
        let Some(args) = self.arguments(plan) else {
            debug!(program = %self.program, "empty selection, not running");
            return Ok(());
        };

        info!(program = %self.program, tests = plan.len(), "running tests");
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|e| SinkError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SinkError::Failed {
                program: self.program.clone(),
                code: status.code().unwrap_or(-1),
            })
        }
    }
}
