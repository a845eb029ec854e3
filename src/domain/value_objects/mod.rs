//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compile_stage;
mod config_warning;
mod preprocessor_flavor;
mod resolved_location;
mod source_reference;

pub use compile_stage::CompileStage;
pub use config_warning::ConfigWarning;
pub use preprocessor_flavor::PreprocessorFlavor;
pub use resolved_location::ResolvedLocation;
pub use source_reference::{SourceReference, FILE_URL_PREFIX};
