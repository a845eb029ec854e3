//! Subprocess Preprocessor
//!
//! Runs the preprocessor as a child process and waits for it synchronously.
//! There is no timeout: once started, the child runs to completion.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::entities::{ProcessInvocation, ProcessOutcome};
use crate::domain::ports::Preprocessor;
use crate::error::{IdlcError, IdlcResult};

/// Base name of the preprocessor shipped next to the driver.
pub const BUNDLED_PREPROCESSOR: &str = "ucpp";

/// Preprocessor that spawns the invocation's program.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessPreprocessor;

impl ProcessPreprocessor {
    pub fn new() -> Self {
        Self
    }
}

impl Preprocessor for ProcessPreprocessor {
    fn run(&self, invocation: &ProcessInvocation) -> ProcessOutcome {
        let status = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) if status.success() => ProcessOutcome::Success,
            Ok(status) => ProcessOutcome::NonZeroExit {
                code: status.code(),
            },
            Err(e) => ProcessOutcome::LaunchFailure {
                message: e.to_string(),
            },
        }
    }
}

/// Where the preprocessor executable lives.
///
/// An explicitly configured path wins, then a system preprocessor named at
/// build time through `IDLC_SYSTEM_PREPROCESSOR`, then `ucpp` in the directory
/// of the running executable.
pub fn locate_preprocessor(configured: Option<&Path>) -> IdlcResult<PathBuf> {
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = option_env!("IDLC_SYSTEM_PREPROCESSOR") {
        return Ok(PathBuf::from(path));
    }

    let exe = std::env::current_exe().map_err(|e| IdlcError::PreprocessorLaunch {
        program: PathBuf::from(bundled_file_name()),
        message: format!("cannot locate the running executable: {e}"),
    })?;
    Ok(bundled_next_to(&exe))
}

/// The bundled preprocessor's path for a driver installed at `exe`.
pub fn bundled_next_to(exe: &Path) -> PathBuf {
    exe.with_file_name(bundled_file_name())
}

fn bundled_file_name() -> String {
    format!("{BUNDLED_PREPROCESSOR}{EXE_SUFFIX}")
}
