//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the compile use case with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line interface and option merging
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use idlc::presentation::factory;
//!
//! let mut driver = factory::create_compilation_driver(options, events)?;
//! let result = driver.compile(&source);
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{program_name, Cli};
pub use factory::{create_compilation_driver, ConcreteCompilationDriver};
pub use output::{
    exit_code_for, CompileResultRenderer, JsonRenderer, OutputFormat, TextRenderer,
};
