use std::io::{self, Write};

use serde_json::{json, Value};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

/// Write an event to stdout
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)?;
    out.flush()
}

/// `{"event": "error", ...}` for a failed command
pub fn error_event(message: &str, recoverable: bool) -> Value {
    json!({ "event": "error", "message": message, "recoverable": recoverable })
}
