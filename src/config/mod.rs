//! Configuration module for idlc
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the presentation layer)
//! 2. Environment variables (IDLC_*)
//! 3. Project config (`idlc.toml` in the working directory, or `--config`)
//! 4. User config (`<config dir>/idlc/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    split_tokens, with_env_overrides, with_env_overrides_from, ENV_DEFINES, ENV_INCLUDE_PATHS,
    ENV_PREPROCESSOR, ENV_PREPROCESSOR_FLAVOR, ENV_VERBOSITY, PROJECT_CONFIG_FILE,
    USER_CONFIG_PATH,
};
pub use types::{Config, OutputConfig, PreprocessorConfig, Verbosity};
