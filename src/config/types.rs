//! Configuration type definitions

use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigWarning, PreprocessorFlavor};
use crate::error::IdlcResult;

use super::loader;

/// Preprocessor configuration
///
/// ```toml
/// [preprocessor]
/// path = "/usr/bin/cpp"
/// flavor = "gcc"
/// defines = ["DEBUG", "VERSION=2"]
/// include_paths = ["idl/common"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PreprocessorConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub flavor: Option<PreprocessorFlavor>,

    #[serde(default)]
    pub defines: Vec<String>,

    #[serde(default)]
    pub include_paths: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Emit NDJSON events instead of text
    #[serde(default)]
    pub json: bool,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const NAMES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Level for `-v` given `count` times; 0 keeps `self`.
    pub fn raised_by(self, count: u8) -> Self {
        match count {
            0 => self,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    /// The log level this verbosity maps to.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Warn,
            Verbosity::Verbose => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub preprocessor: PreprocessorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> IdlcResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> IdlcResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, else the project config, else the user config,
    /// else defaults; then apply environment overrides.
    pub fn load_or_default(
        project_root: Option<&Path>,
        explicit: Option<&Path>,
    ) -> IdlcResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root, explicit)
    }

    /// Apply environment variable overrides (IDLC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
