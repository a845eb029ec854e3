//! Temporary file allocation
//!
//! Names are claimed atomically: the `tempfile` crate creates the file with
//! exclusive-create semantics, so two processes can never be handed the same
//! path. Deletion is the caller's job; a [`TemporaryFile`] that is dropped
//! without being removed deletes itself on a best-effort basis.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{IdlcError, IdlcResult};

/// Number of random characters appended to the prefix.
pub const UNIQUE_SUFFIX_LEN: usize = 6;

/// Longest temporary file path the allocator will produce, in bytes.
pub const MAX_TEMP_PATH_LEN: usize = 512;

/// Environment variables consulted for the temp directory, in order.
pub const TEMP_DIR_VARS: [&str; 2] = ["TMP", "TEMP"];

#[cfg(windows)]
const DEFAULT_TEMP_DIR: &str = "c:\\temp";
#[cfg(not(windows))]
const DEFAULT_TEMP_DIR: &str = "/tmp";

/// Pick the temp directory from the first non-empty variable in
/// [`TEMP_DIR_VARS`], falling back to the platform default.
pub fn temp_dir_from<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<OsString>,
{
    TEMP_DIR_VARS
        .iter()
        .find_map(|var| lookup(var).filter(|value| !value.is_empty()))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMP_DIR))
}

/// Hands out the temp files of a compilation run.
pub trait TempFileSource {
    fn allocate(&self, prefix: &str) -> IdlcResult<TemporaryFile>;
}

/// Creates uniquely named files in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempFileAllocator {
    dir: PathBuf,
}

impl TempFileAllocator {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Allocate in the directory named by `TMP`/`TEMP` or the platform default.
    pub fn from_env() -> Self {
        Self::new(temp_dir_from(|var| std::env::var_os(var)))
    }

    /// Create an empty file named `<dir>/<prefix><unique suffix>`.
    pub fn allocate(&self, prefix: &str) -> IdlcResult<TemporaryFile> {
        let pattern = self
            .dir
            .join(format!("{prefix}{}", "X".repeat(UNIQUE_SUFFIX_LEN)));

        if pattern.as_os_str().len() >= MAX_TEMP_PATH_LEN {
            return Err(IdlcError::TempAllocation {
                pattern,
                cause: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("path exceeds {MAX_TEMP_PATH_LEN} bytes"),
                ),
            });
        }

        let created = tempfile::Builder::new()
            .prefix(prefix)
            .rand_bytes(UNIQUE_SUFFIX_LEN)
            .tempfile_in(&self.dir)
            .and_then(|file| file.keep().map_err(|e| e.error))
            .map_err(|cause| IdlcError::TempAllocation {
                pattern: pattern.clone(),
                cause,
            })?;

        // Only the name is needed; the file is reopened by whoever writes it.
        let (handle, path) = created;
        drop(handle);

        debug!("allocated temporary file {}", path.display());
        Ok(TemporaryFile { path })
    }
}

impl TempFileSource for TempFileAllocator {
    fn allocate(&self, prefix: &str) -> IdlcResult<TemporaryFile> {
        TempFileAllocator::allocate(self, prefix)
    }
}

/// A file created by [`TempFileAllocator`] and owned by one compilation run.
///
/// Call [`TemporaryFile::remove`] to delete it and observe failures. If it is
/// dropped instead, deletion is attempted and failures are only logged.
#[derive(Debug)]
pub struct TemporaryFile {
    path: PathBuf,
}

impl TemporaryFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file, consuming the handle so it cannot be deleted twice.
    pub fn remove(mut self) -> io::Result<()> {
        let path = std::mem::take(&mut self.path);
        std::fs::remove_file(&path)?;
        debug!("removed temporary file {}", path.display());
        Ok(())
    }
}

impl Drop for TemporaryFile {
    fn drop(&mut self) {
        if self.path.as_os_str().is_empty() {
            return;
        }

        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("removed temporary file {}", self.path.display()),
            Err(e) => warn!(
                "could not remove temporary file {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
