//! Error types for idlc
//!
//! Uses `thiserror` for library errors. Every variant is fatal to the current
//! run and maps to a process exit status via [`IdlcError::exit_code`]; parse
//! errors are not errors in this sense and travel through
//! [`CompileOutcome`](crate::application::CompileOutcome) instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for pipeline infrastructure failures.
///
/// Never 1, which the CLI reserves for runs that finished with parse errors.
pub const FATAL_EXIT_CODE: i32 = 99;

/// Exit status used for invalid configuration.
pub const CONFIG_EXIT_CODE: i32 = 2;

/// Result type alias for idlc operations
pub type IdlcResult<T> = Result<T, IdlcError>;

/// Main error type for idlc operations
#[derive(Error, Debug)]
pub enum IdlcError {
    /// A source reference could not be turned into a path/URL pair
    #[error("could not resolve {reference}: {message}")]
    PathResolution { reference: String, message: String },

    /// A temporary file could not be created
    #[error("could not create temporary file {}: {cause}", pattern.display())]
    TempAllocation {
        pattern: PathBuf,
        #[source]
        cause: io::Error,
    },

    /// The input could not be copied into the raw temporary file
    #[error("could not copy {source_name} to {}: {cause}", destination.display())]
    Copy {
        source_name: String,
        destination: PathBuf,
        #[source]
        cause: io::Error,
    },

    /// The preprocessor executable could not be located or started
    #[error("starting preprocessor {} failed: {message}", program.display())]
    PreprocessorLaunch { program: PathBuf, message: String },

    /// The preprocessor ran but did not succeed
    #[error("preprocessing {source_name} failed{}", exit_suffix(*code))]
    PreprocessorExit {
        source_name: String,
        code: Option<i32>,
    },

    /// A temporary file could not be deleted
    #[error("could not remove {role} file {}: {cause}", path.display())]
    TempCleanup {
        role: &'static str,
        path: PathBuf,
        #[source]
        cause: io::Error,
    },

    /// The preprocessed output could not be opened for parsing
    #[error("could not open preprocessor output file {}: {cause}", path.display())]
    ParserOpen {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },

    /// Invalid configuration file
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },
}

fn exit_suffix(code: Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {code})"),
        None => " (terminated without exit code)".to_string(),
    }
}

impl IdlcError {
    /// The process exit status the CLI terminates with for this error.
    ///
    /// A preprocessor that exited non-zero propagates its own code; every
    /// other infrastructure failure uses a fixed status.
    pub fn exit_code(&self) -> i32 {
        match self {
            IdlcError::PreprocessorExit { code, .. } => match code {
                Some(code) if *code != 0 => *code,
                _ => FATAL_EXIT_CODE,
            },
            IdlcError::Config { .. } => CONFIG_EXIT_CODE,
            IdlcError::PathResolution { .. }
            | IdlcError::TempAllocation { .. }
            | IdlcError::Copy { .. }
            | IdlcError::PreprocessorLaunch { .. }
            | IdlcError::TempCleanup { .. }
            | IdlcError::ParserOpen { .. } => FATAL_EXIT_CODE,
        }
    }
}
