//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Path resolution, temp files, copying
//! - `preprocessor/` - Command-line assembly and the subprocess runner
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod fs;
pub mod preprocessor;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::{FileCopier, PathResolver, TempFileAllocator, TemporaryFile};
pub use preprocessor::{locate_preprocessor, PreprocessorCommand, ProcessPreprocessor};
