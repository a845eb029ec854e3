//! Source Reference Value Object
//!
//! What the user asked to compile: a named file (plain path or `file://` URL)
//! or standard input.

use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix that marks a reference as a file URL rather than a plain path.
pub const FILE_URL_PREFIX: &str = "file://";

/// The input of one compilation run
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceReference {
    /// A filesystem path or `file://` URL, exactly as the caller wrote it
    Path(PathBuf),
    /// The process's standard input
    Stdin,
}

impl SourceReference {
    /// Build a reference from a command-line argument. `-` means stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() == "-" => SourceReference::Stdin,
            Some(path) => SourceReference::Path(path),
            None => SourceReference::Stdin,
        }
    }

    /// The path as given, or `None` for stdin.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SourceReference::Path(path) => Some(path),
            SourceReference::Stdin => None,
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, SourceReference::Stdin)
    }

    /// Whether the reference uses the `file://` URL form.
    pub fn is_file_url(&self) -> bool {
        self.path()
            .and_then(Path::to_str)
            .is_some_and(|s| s.starts_with(FILE_URL_PREFIX))
    }

    /// The name used for this input in diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            SourceReference::Path(path) => path.display().to_string(),
            SourceReference::Stdin => "stdin".to_string(),
        }
    }

    /// The name used in "could not copy ..." style messages: `file <name>` or `stdin`.
    pub fn describe(&self) -> String {
        match self {
            SourceReference::Path(_) => format!("file {}", self.display_name()),
            SourceReference::Stdin => self.display_name(),
        }
    }
}

impl fmt::Display for SourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
