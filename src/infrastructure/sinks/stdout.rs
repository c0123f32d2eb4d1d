//! Plan printer
//!
//! Writes the node ids of a plan, one per line, or as NDJSON events:
//! a `plan` header followed by one `test` event per item.

use std::io::{self, Write};

use serde_json::json;

use crate::domain::entities::ExecutionPlan;
use crate::domain::ports::{ExecutionSink, SinkError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanFormat {
    #[default]
    NodeIds,
    Ndjson,
}

pub struct StdoutSink<W: Write = io::Stdout> {
    out: W,
    format: PlanFormat,
}

impl StdoutSink {
    pub fn new(format: PlanFormat) -> Self {
        Self::with_writer(io::stdout(), format)
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn with_writer(out: W, format: PlanFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ExecutionSink for StdoutSink<W> {
    fn execute(&mut self, plan: &ExecutionPlan) -> Result<(), SinkError> {
        match self.format {
            PlanFormat::NodeIds => {
                for id in plan.node_ids() {
                    writeln!(self.out, "{}", id)?;
                }
            }
            PlanFormat::Ndjson => {
                let mode = if plan.is_unfiltered() {
                    "unfiltered"
                } else {
                    "selected"
                };
                write_line(
                    &mut self.out,
                    &json!({ "event": "plan", "mode": mode, "count": plan.len() }),
                )?;
                for (index, id) in plan.node_ids().into_iter().enumerate() {
                    write_line(
                        &mut self.out,
                        &json!({ "event": "test", "index": index, "node_id": id }),
                    )?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

fn write_line(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}
