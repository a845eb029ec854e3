//! Compile Module
//!
//! Drives one input through resolution, copying, preprocessing and parsing.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`CompileOptions`)
//! - `result` - Result types (`CompileOutcome`, `CompilationResult`)
//! - `driver` - The staged pipeline (`CompilationDriver`)
//!
//! ## Usage
//!
//! ```ignore
//! use idlc::application::compile::{CompilationDriver, CompileOptions};
//!
//! let mut driver = CompilationDriver::new(options, resolver, allocator, preprocessor, parser);
//! let outcome = driver.compile(&SourceReference::Path("types.idl".into()))?;
//! ```

mod driver;
mod options;
mod result;

pub use driver::{CompilationDriver, PREPROCESSED_PREFIX, RAW_INPUT_PREFIX};
pub use options::CompileOptions;
pub use result::{CompilationResult, CompileOutcome};
