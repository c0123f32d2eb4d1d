//! Execution sinks
//!
//! - `StdoutSink` - prints the plan (node ids or NDJSON)
//! - `CommandSink` - runs a test command with the selected ids appended

mod command;
mod stdout;

pub use command::CommandSink;
pub use stdout::{PlanFormat, StdoutSink};
