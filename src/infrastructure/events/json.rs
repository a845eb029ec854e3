//! JSON Event Sink
//!
//! Outputs compile events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CompileEvent, CompileEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl CompileEventSink for JsonEventSink {
    fn on_event(&self, event: CompileEvent) {
        let json = match event {
            CompileEvent::Started { source } => serde_json::json!({
                "event": "start",
                "command": "compile",
                "source": source,
            }),

            CompileEvent::StageEntered { stage } => serde_json::json!({
                "event": "stage",
                "command": "compile",
                "stage": stage.as_str(),
            }),

            CompileEvent::PreprocessorInvoked { command } => serde_json::json!({
                "event": "preprocess",
                "command": "compile",
                "command_line": command,
            }),

            CompileEvent::Completed {
                preprocessed_only,
                error_count,
            } => {
                let status = if error_count == 0 { "success" } else { "errors" };
                serde_json::json!({
                    "event": "complete",
                    "command": "compile",
                    "status": status,
                    "preprocessed_only": preprocessed_only,
                    "errors": error_count,
                })
            }

            CompileEvent::Failed { message, exit_code } => serde_json::json!({
                "event": "error",
                "command": "compile",
                "message": message,
                "exit_code": exit_code,
            }),
        };

        self.write_event(json);
    }
}
