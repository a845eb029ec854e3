//! Parser port - the consumer of preprocessed text
//!
//! The driver treats the parser as opaque: it hands over a readable stream
//! positioned at the start of the preprocessed file and gets an error count
//! back.

use std::io::BufRead;

use crate::domain::entities::SourceNames;

/// Parses one preprocessed translation unit.
pub trait IdlParser {
    /// Consume `input` fully and return the number of errors reported.
    fn parse(&mut self, input: &mut dyn BufRead, names: &SourceNames) -> usize;
}

impl<P: IdlParser + ?Sized> IdlParser for &mut P {
    fn parse(&mut self, input: &mut dyn BufRead, names: &SourceNames) -> usize {
        (**self).parse(input, names)
    }
}
