//! Domain Layer
//!
//! The vocabulary of a compilation run, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Process invocations and source naming
//! - `value_objects/` - Immutable value types (SourceReference, ResolvedLocation, CompileStage)
//! - `ports/` - Interface definitions for the preprocessor, the parser and event sinks
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Ports & Adapters** - Collaborators are reached through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
