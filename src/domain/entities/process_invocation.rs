//! Process Invocation Entity
//!
//! One call of the external preprocessor: what to run and how it ended.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// An executable plus its ordered argument vector.
///
/// Created fresh per preprocessor call and discarded once the outcome is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInvocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ProcessInvocation {
    pub fn new(program: impl Into<PathBuf>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Arguments rendered lossily, for logging and assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// The value following `flag`, e.g. the path after `-o`.
    pub fn value_after(&self, flag: &str) -> Option<&OsStr> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(OsString::as_os_str)
    }
}

impl fmt::Display for ProcessInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How a preprocessor invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Exit code 0
    Success,
    /// The executable could not be started
    LaunchFailure { message: String },
    /// The process ran but did not exit with 0. `code` is `None` when it was
    /// terminated without an exit code (e.g. killed by a signal).
    NonZeroExit { code: Option<i32> },
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessOutcome::Success)
    }
}
