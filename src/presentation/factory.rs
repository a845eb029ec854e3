//! Use Case Factory
//!
//! Creates the compile use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::compile::{CompilationDriver, CompileOptions};
use crate::domain::ports::CompileEventSink;
use crate::error::IdlcResult;
use crate::infrastructure::{PathResolver, ProcessPreprocessor, TempFileAllocator};
use crate::parser::StructuralParser;

/// Type alias for the concrete CompilationDriver with all dependencies
pub type ConcreteCompilationDriver = CompilationDriver<ProcessPreprocessor, StructuralParser>;

/// Create a compilation driver with all dependencies wired up
///
/// Paths resolve against the current directory and temp files go to the
/// directory named by `TMP`/`TEMP`.
pub fn create_compilation_driver(
    options: CompileOptions,
    events: Arc<dyn CompileEventSink>,
) -> IdlcResult<ConcreteCompilationDriver> {
    let resolver = PathResolver::from_current_dir()?;
    let allocator = TempFileAllocator::from_env();

    Ok(CompilationDriver::new(
        options,
        resolver,
        allocator,
        ProcessPreprocessor::new(),
        StructuralParser::new(),
    )
    .with_events(events))
}
