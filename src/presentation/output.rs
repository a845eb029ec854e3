//! Output Rendering
//!
//! Renders the end of a compile run. Text goes to stderr in the
//! `<program>: <message>` form of a compiler; JSON is a single `result`
//! NDJSON event that follows the progress events on stdout.

use std::io::{self, Write};

use crate::application::compile::{CompilationResult, CompileOutcome};
use crate::parser::Diagnostic;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON for CI
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Process exit status for a finished run.
///
/// Parse errors exit 1 so they stay distinguishable from the pipeline's own
/// failure codes.
pub fn exit_code_for(result: &CompilationResult) -> i32 {
    match result {
        Ok(outcome) if outcome.is_clean() => 0,
        Ok(_) => 1,
        Err(e) => e.exit_code(),
    }
}

/// Trait for rendering compile results
pub trait CompileResultRenderer {
    fn render(
        &self,
        result: &CompilationResult,
        diagnostics: &[Diagnostic],
        out: &mut dyn Write,
    ) -> io::Result<()>;
}

/// Text renderer for compile results
pub struct TextRenderer {
    /// Prefix of summary and error lines
    pub program_name: String,
    /// Verbosity level
    pub verbose: u8,
}

impl TextRenderer {
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
            verbose: 0,
        }
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }
}

impl CompileResultRenderer for TextRenderer {
    fn render(
        &self,
        result: &CompilationResult,
        diagnostics: &[Diagnostic],
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let program = &self.program_name;
        match result {
            Err(e) => writeln!(out, "{program}: {e}"),
            Ok(CompileOutcome::Preprocessed) => {
                if self.verbose > 0 {
                    writeln!(out, "{program}: preprocessing succeeded")?;
                }
                Ok(())
            }
            Ok(CompileOutcome::Parsed { error_count: 0 }) => {
                if self.verbose > 0 {
                    writeln!(out, "{program}: no errors")?;
                }
                Ok(())
            }
            Ok(CompileOutcome::Parsed { error_count }) => {
                for diagnostic in diagnostics {
                    writeln!(out, "{diagnostic}")?;
                }
                let plural = if *error_count == 1 { "" } else { "s" };
                writeln!(out, "{program}: {error_count} error{plural}")
            }
        }
    }
}

/// JSON renderer for compile results
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl CompileResultRenderer for JsonRenderer {
    fn render(
        &self,
        result: &CompilationResult,
        diagnostics: &[Diagnostic],
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let exit_code = exit_code_for(result);
        let event = match result {
            Ok(outcome) => serde_json::json!({
                "event": "result",
                "command": "compile",
                "status": if outcome.is_clean() { "success" } else { "errors" },
                "preprocessed_only": matches!(outcome, CompileOutcome::Preprocessed),
                "errors": outcome.error_count(),
                "diagnostics": diagnostics,
                "exit_code": exit_code,
            }),
            Err(e) => serde_json::json!({
                "event": "result",
                "command": "compile",
                "status": "failed",
                "message": e.to_string(),
                "diagnostics": [],
                "exit_code": exit_code,
            }),
        };
        write_event(out, &event)
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut dyn Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
