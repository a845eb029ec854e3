//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompilationDriver` - Copies, preprocesses and parses one source,
//!   owning its temporary files

pub mod compile;

pub use compile::{
    CompilationDriver, CompilationResult, CompileOptions, CompileOutcome, PREPROCESSED_PREFIX,
    RAW_INPUT_PREFIX,
};
