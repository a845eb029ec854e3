//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compile_events;
pub mod parser;
pub mod preprocessor;

pub use compile_events::{CompileEvent, CompileEventSink, NoopEventSink};
pub use parser::IdlParser;
pub use preprocessor::Preprocessor;
