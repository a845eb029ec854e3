//! Resolved Location Value Object

use std::path::{Path, PathBuf};

use url::Url;

/// The canonical (filesystem path, URL) pair for one input.
///
/// Both forms always denote the same file. Construct through
/// [`PathResolver`](crate::infrastructure::fs::PathResolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    path: PathBuf,
    url: Url,
}

impl ResolvedLocation {
    pub(crate) fn new(path: PathBuf, url: Url) -> Self {
        Self { path, url }
    }

    /// Absolute filesystem path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Canonical `file://` URL
    pub fn url(&self) -> &Url {
        &self.url
    }
}
