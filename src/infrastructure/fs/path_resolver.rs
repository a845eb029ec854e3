//! Path Resolution
//!
//! Normalizes a user-supplied file reference into an absolute filesystem path
//! and a canonical `file://` URL.

use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::domain::value_objects::{ResolvedLocation, FILE_URL_PREFIX};
use crate::error::{IdlcError, IdlcResult};

/// Resolves references relative to a fixed working directory.
///
/// The file does not need to exist. An existing file is resolved through the
/// filesystem, so `..` after a symlinked directory climbs out of the link's
/// target; a missing one has its dot segments folded lexically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    working_dir: PathBuf,
}

impl PathResolver {
    /// Resolve against the process's current working directory.
    pub fn from_current_dir() -> IdlcResult<Self> {
        let working_dir = std::env::current_dir().map_err(|e| IdlcError::PathResolution {
            reference: ".".to_string(),
            message: format!("cannot determine working directory: {e}"),
        })?;
        Ok(Self::with_working_dir(working_dir))
    }

    /// Resolve against an explicit working directory. It must be absolute.
    pub fn with_working_dir(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Resolve a plain path or `file://` URL.
    pub fn resolve(&self, reference: &Path) -> IdlcResult<ResolvedLocation> {
        if reference.as_os_str().is_empty() {
            return Err(resolution_error(reference, "empty path"));
        }

        match reference.to_str() {
            Some(text) if text.starts_with(FILE_URL_PREFIX) => self.resolve_url(reference, text),
            _ => self.resolve_path(reference),
        }
    }

    fn resolve_url(&self, reference: &Path, text: &str) -> IdlcResult<ResolvedLocation> {
        let url = Url::parse(text).map_err(|e| resolution_error(reference, &e.to_string()))?;
        let path = url
            .to_file_path()
            .map_err(|()| resolution_error(reference, "not a local file URL"))?;
        let path = on_disk(&path);

        // Re-derive the URL from the path so both spellings of a file agree.
        let canonical = Url::from_file_path(&path)
            .map_err(|()| resolution_error(reference, "cannot express path as a file URL"))?;
        Ok(ResolvedLocation::new(path, canonical))
    }

    fn resolve_path(&self, reference: &Path) -> IdlcResult<ResolvedLocation> {
        let joined = self.working_dir.join(reference);
        if !joined.is_absolute() {
            return Err(resolution_error(
                reference,
                &format!(
                    "working directory {} is not absolute",
                    self.working_dir.display()
                ),
            ));
        }

        let path = on_disk(&joined);
        let url = Url::from_file_path(&path)
            .map_err(|()| resolution_error(reference, "cannot express path as a file URL"))?;
        Ok(ResolvedLocation::new(path, url))
    }
}

fn resolution_error(reference: &Path, message: &str) -> IdlcError {
    IdlcError::PathResolution {
        reference: reference.display().to_string(),
        message: message.to_string(),
    }
}

/// The path the OS would open for `path`, or its lexical form if it does not exist.
fn on_disk(path: &Path) -> PathBuf {
    // Verbatim `\\?\` paths from canonicalize have no file URL form.
    if cfg!(windows) {
        return normalize(path);
    }
    std::fs::canonicalize(path).unwrap_or_else(|_| normalize(path))
}

/// Lexically remove `.` and `..` components. `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                );
                if !at_root {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
