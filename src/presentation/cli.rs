//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `-D` and `-I` accept the attached form (`-DNAME`, `-I/dir`) like a C compiler
//! - A missing FILE or `-` reads the source from standard input

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::application::compile::CompileOptions;
use crate::config::Config;
use crate::domain::value_objects::{PreprocessorFlavor, SourceReference};

/// idlc - preprocess and check an interface-definition source
#[derive(Parser, Debug)]
#[command(name = "idlc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// IDL source file or file:// URL (`-` or omitted: standard input)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Define a preprocessor macro (repeatable)
    #[arg(short = 'D', long = "define", value_name = "NAME[=VALUE]")]
    pub defines: Vec<String>,

    /// Add an include directory (repeatable)
    #[arg(short = 'I', long = "include", value_name = "DIR")]
    pub include_paths: Vec<String>,

    /// Stop after preprocessing; do not parse
    #[arg(short = 'E', long = "preprocess-only")]
    pub preprocess_only: bool,

    /// Preprocessor executable to run instead of the bundled one
    #[arg(long, value_name = "PATH")]
    pub preprocessor: Option<PathBuf>,

    /// Command-line dialect of the preprocessor
    #[arg(long, value_enum)]
    pub flavor: Option<PreprocessorFlavor>,

    /// Configuration file to use instead of idlc.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn source(&self) -> SourceReference {
        SourceReference::from_arg(self.file.clone())
    }

    /// Merge the command line over `config`.
    ///
    /// Scalars given on the command line win; `-D` and `-I` values are
    /// appended after the configured ones.
    pub fn compile_options(&self, config: &Config, program_name: &str) -> CompileOptions {
        let preprocessor = &config.preprocessor;

        let mut options = CompileOptions::new()
            .with_program_name(program_name)
            .with_preprocess_only(self.preprocess_only)
            .with_defines(concat(&preprocessor.defines, &self.defines))
            .with_include_paths(concat(&preprocessor.include_paths, &self.include_paths))
            .with_flavor(
                self.flavor
                    .or(preprocessor.flavor)
                    .unwrap_or_else(PreprocessorFlavor::build_default),
            );

        if let Some(path) = self.preprocessor.as_ref().or(preprocessor.path.as_ref()) {
            options = options.with_preprocessor(path);
        }
        options
    }
}

fn concat(configured: &[String], given: &[String]) -> Vec<String> {
    configured.iter().chain(given).cloned().collect()
}

/// Diagnostic prefix derived from `argv[0]`.
pub fn program_name(arg0: Option<OsString>) -> String {
    arg0.as_deref()
        .map(Path::new)
        .and_then(Path::file_stem)
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "idlc".to_string())
}
