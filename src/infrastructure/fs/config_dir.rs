//! User configuration directory resolution with test isolation support.
//!
//! `dirs::config_dir()` uses platform APIs (`SHGetKnownFolderPath` on Windows,
//! `~/Library/Application Support` on macOS) that ignore `HOME`, so tests
//! cannot redirect it through the environment. [`user_config_dir`] checks
//! `IDLC_TEST_CONFIG_DIR` first.

use std::path::PathBuf;

/// Environment variable that overrides the user configuration directory.
pub const IDLC_TEST_CONFIG_DIR_VAR: &str = "IDLC_TEST_CONFIG_DIR";

/// Directory that holds `idlc/config.toml`.
///
/// Returns `None` if neither the override is set nor the platform directory
/// can be determined.
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os(IDLC_TEST_CONFIG_DIR_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}
