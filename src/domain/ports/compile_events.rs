//! Compile Event Port
//!
//! Provides an observable interface for compile runs.
//! Enables JSON event streams and debugging.

use crate::domain::value_objects::CompileStage;

/// Event emitted during a compile run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileEvent {
    /// Run started
    Started { source: String },

    /// The driver moved to a new stage
    StageEntered { stage: CompileStage },

    /// The preprocessor is about to run
    PreprocessorInvoked { command: String },

    /// Run finished; `error_count` is 0 when parsing was skipped
    Completed {
        preprocessed_only: bool,
        error_count: usize,
    },

    /// Run aborted
    Failed { message: String, exit_code: i32 },
}

/// Trait for receiving compile events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait CompileEventSink: Send + Sync {
    /// Handle a compile event
    fn on_event(&self, event: CompileEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CompileEventSink for NoopEventSink {
    fn on_event(&self, _event: CompileEvent) {}
}
