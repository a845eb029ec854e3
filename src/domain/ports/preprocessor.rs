//! Preprocessor port - running the external text preprocessor
//!
//! The compile use case builds a [`ProcessInvocation`] and hands it to an
//! implementation of this trait; it never spawns processes itself.

use crate::domain::entities::{ProcessInvocation, ProcessOutcome};

/// Runs one preprocessor invocation to completion.
///
/// Implementations:
/// - `ProcessPreprocessor` - spawns the executable and waits for it
/// - test doubles that write the output file in-process
pub trait Preprocessor {
    /// Run the invocation and block until it finishes. No timeout.
    fn run(&self, invocation: &ProcessInvocation) -> ProcessOutcome;
}

impl<P: Preprocessor + ?Sized> Preprocessor for &P {
    fn run(&self, invocation: &ProcessInvocation) -> ProcessOutcome {
        (**self).run(invocation)
    }
}

impl<P: Preprocessor + ?Sized> Preprocessor for Box<P> {
    fn run(&self, invocation: &ProcessInvocation) -> ProcessOutcome {
        (**self).run(invocation)
    }
}
