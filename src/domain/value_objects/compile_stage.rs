//! Compile Stage Value Object
//!
//! Where a compilation run currently is. Stages only move forward; `Aborted`
//! can be entered from any stage that is not terminal.

use std::fmt;

/// Stage of the compile pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompileStage {
    #[default]
    Start,
    /// The source reference was turned into a path/URL pair
    Resolved,
    /// The input was copied into the raw temp file
    RawCopied,
    /// The preprocessor succeeded and the raw temp file is gone
    Preprocessed,
    /// The parser is consuming the preprocessed output
    Parsing,
    Finished,
    Aborted,
}

impl CompileStage {
    pub fn as_str(self) -> &'static str {
        match self {
            CompileStage::Start => "start",
            CompileStage::Resolved => "resolved",
            CompileStage::RawCopied => "raw-copied",
            CompileStage::Preprocessed => "preprocessed",
            CompileStage::Parsing => "parsing",
            CompileStage::Finished => "finished",
            CompileStage::Aborted => "aborted",
        }
    }

    /// `Finished` and `Aborted` end a run.
    pub fn is_terminal(self) -> bool {
        matches!(self, CompileStage::Finished | CompileStage::Aborted)
    }
}

impl fmt::Display for CompileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
