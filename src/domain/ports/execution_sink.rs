//! ExecutionSink port
//!
//! Receives the final plan once a session ends.

use crate::domain::entities::ExecutionPlan;

pub trait ExecutionSink {
    fn execute(&mut self, plan: &ExecutionPlan) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write plan: {0}")]
    Write(#[from] std::io::Error),

    #[error("run command is empty")]
    EmptyCommand,

    #[error("failed to start '{program}': {message}")]
    Spawn { program: String, message: String },

    #[error("'{program}' exited with status {code}")]
    Failed { program: String, code: i32 },
}
