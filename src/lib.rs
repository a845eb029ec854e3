//! idlc - compilation driver for interface-definition sources
//!
//! idlc takes an IDL source from a file, a `file://` URL or standard input,
//! copies it to a temporary file, runs an external C-style preprocessor over
//! it and hands the result to a parser. Every temporary file is removed
//! before a run returns, whether it succeeded or not.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod parser;
pub mod presentation;

// Re-exports for convenience
pub use application::{CompilationDriver, CompilationResult, CompileOptions, CompileOutcome};
pub use config::Config;
pub use domain::value_objects::{PreprocessorFlavor, SourceReference};
pub use error::{IdlcError, IdlcResult};
pub use parser::{Diagnostic, StructuralParser};
