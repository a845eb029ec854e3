//! Domain Entities
//!
//! - `ProcessInvocation` / `ProcessOutcome` - one preprocessor call
//! - `SourceNames` - how the current input is named in diagnostics

mod process_invocation;
mod source_names;

pub use process_invocation::{ProcessInvocation, ProcessOutcome};
pub use source_names::SourceNames;
