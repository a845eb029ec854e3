//! Source Names Entity
//!
//! File-name bookkeeping handed to the parser alongside the preprocessed
//! stream.

use std::path::{Path, PathBuf};

/// Names under which the current input is known.
///
/// The preprocessor only ever sees the raw temp copy, so its line markers name
/// `real_file_name`; diagnostics must show `main_file_name` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNames {
    /// Name of the file currently being reported on
    pub file_name: String,
    /// Name of the input as the user gave it (`stdin` for standard input)
    pub main_file_name: String,
    /// The raw temp copy that was fed to the preprocessor
    pub real_file_name: PathBuf,
}

impl SourceNames {
    pub fn new(main_file_name: impl Into<String>, real_file_name: impl Into<PathBuf>) -> Self {
        let main_file_name = main_file_name.into();
        Self {
            file_name: main_file_name.clone(),
            main_file_name,
            real_file_name: real_file_name.into(),
        }
    }

    /// Map a file name found in a line marker to the name shown to users.
    pub fn display_name_for<'a>(&'a self, marker_name: &'a str) -> &'a str {
        if Path::new(marker_name) == self.real_file_name.as_path() {
            &self.main_file_name
        } else {
            marker_name
        }
    }
}
