//! Compile Result
//!
//! A run either reaches a result (possibly with parse errors) or is aborted
//! with an [`IdlcError`].

use crate::error::IdlcError;

/// How a run that was not aborted ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileOutcome {
    /// The parser consumed the preprocessed output
    Parsed { error_count: usize },
    /// Stopped after preprocessing; the parser never ran
    Preprocessed,
}

impl CompileOutcome {
    /// Parse errors reported, 0 when parsing was skipped.
    pub fn error_count(&self) -> usize {
        match self {
            CompileOutcome::Parsed { error_count } => *error_count,
            CompileOutcome::Preprocessed => 0,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }
}

/// Result of one compile run
pub type CompilationResult = Result<CompileOutcome, IdlcError>;
