//! Compile Options
//!
//! Settings for a compile run, already merged from CLI, environment and
//! config files.

use std::path::PathBuf;

use crate::domain::value_objects::PreprocessorFlavor;

/// Default program name used in diagnostics
pub const DEFAULT_PROGRAM_NAME: &str = "idlc";

/// Options for the compile use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Name diagnostics are prefixed with
    pub program_name: String,
    /// Stop after preprocessing, without parsing
    pub preprocess_only: bool,
    /// Macro definitions passed as `-D<token>`
    pub defines: Vec<String>,
    /// Include directories passed as `-I<token>`
    pub include_paths: Vec<String>,
    /// Explicit preprocessor executable
    pub preprocessor: Option<PathBuf>,
    /// Which command-line dialect the preprocessor speaks
    pub flavor: PreprocessorFlavor,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self {
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
            preprocess_only: false,
            defines: Vec::new(),
            include_paths: Vec::new(),
            preprocessor: None,
            flavor: PreprocessorFlavor::build_default(),
        }
    }

    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    pub fn with_preprocess_only(mut self, preprocess_only: bool) -> Self {
        self.preprocess_only = preprocess_only;
        self
    }

    pub fn with_defines(mut self, defines: Vec<String>) -> Self {
        self.defines = defines;
        self
    }

    pub fn with_include_paths(mut self, include_paths: Vec<String>) -> Self {
        self.include_paths = include_paths;
        self
    }

    pub fn with_preprocessor(mut self, path: impl Into<PathBuf>) -> Self {
        self.preprocessor = Some(path.into());
        self
    }

    pub fn with_flavor(mut self, flavor: PreprocessorFlavor) -> Self {
        self.flavor = flavor;
        self
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new()
    }
}
