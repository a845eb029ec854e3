//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that a run left no temporary files behind.
///
/// # Example
/// ```ignore
/// assert_no_temp_files!(env);
/// ```
#[macro_export]
macro_rules! assert_no_temp_files {
    ($env:expr) => {
        let left = $env.temp_files();
        assert!(
            left.is_empty(),
            "Expected the temp directory to be empty, found:\n  {}",
            left.join("\n  ")
        );
    };
}

/// Assert that stdout or stderr contains the given text.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $text:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($text),
            "Expected output to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $text,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the process exit status, showing the output on mismatch.
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code, $code,
            "unexpected exit code.\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}
