//! Test environment for isolated idlc runs.
//!
//! Provides `TestEnv` - a working directory, a private temp directory
//! (exported as `TMP`) and an empty user config directory, plus helpers to
//! run the idlc binary inside them.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Variables that would leak the developer's setup into a run.
const SCRUBBED_VARS: &[&str] = &[
    "IDLC_PREPROCESSOR",
    "IDLC_PREPROCESSOR_FLAVOR",
    "IDLC_DEFINES",
    "IDLC_INCLUDE_PATHS",
    "IDLC_VERBOSITY",
    "RUST_LOG",
    "TEMP",
];

/// Result of running the idlc binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per line.
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {line:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory of every run
    pub work_dir: TempDir,
    /// Exported as `TMP`; must be empty after each run
    pub tmp_dir: TempDir,
    /// Exported as `IDLC_TEST_CONFIG_DIR`
    pub config_dir: TempDir,
    idlc_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            tmp_dir: TempDir::new().expect("Failed to create tmp dir"),
            config_dir: TempDir::new().expect("Failed to create config dir"),
            idlc_bin: PathBuf::from(env!("CARGO_BIN_EXE_idlc")),
        }
    }

    /// Get path relative to the working directory
    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Write a file below the working directory
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write an executable script below the working directory
    #[cfg(unix)]
    pub fn write_script(&self, relative: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write_file(relative, body);
        let mut permissions = std::fs::metadata(&path).unwrap().permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(&path, permissions).unwrap();
        path
    }

    /// Files left behind in the private temp directory
    pub fn temp_files(&self) -> Vec<String> {
        std::fs::read_dir(self.tmp_dir.path())
            .map(|entries| {
                entries
                    .flatten()
                    .map(|entry| entry.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Run idlc from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run idlc with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args, env_vars);
        cmd.stdin(Stdio::null());
        output_to_result(cmd.output().expect("Failed to execute idlc"))
    }

    /// Run idlc with `input` on its standard input
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut cmd = self.command(args, &[]);
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to execute idlc");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        output_to_result(child.wait_with_output().expect("Failed to wait for idlc"))
    }

    fn command(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(&self.idlc_bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("TMP", self.tmp_dir.path())
            .env("IDLC_TEST_CONFIG_DIR", self.config_dir.path());

        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Path as a `&str`, for argument lists.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("test paths are UTF-8")
}
