//! Preprocessor Implementations
//!
//! Building the preprocessor command line and running it as a subprocess.

mod command;
mod process;

pub use command::{PreprocessorCommand, IDL_MODE_FLAG, KEEP_COMMENTS_FLAG, OUTPUT_FLAG};
pub use process::{bundled_next_to, locate_preprocessor, ProcessPreprocessor, BUNDLED_PREPROCESSOR};
