//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::value_objects::{ConfigWarning, PreprocessorFlavor};
use crate::error::{IdlcError, IdlcResult};
use crate::infrastructure::fs::user_config_dir;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Project config file, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "idlc.toml";

/// User config file, relative to the platform config directory
pub const USER_CONFIG_PATH: &str = "idlc/config.toml";

pub const ENV_PREPROCESSOR: &str = "IDLC_PREPROCESSOR";
pub const ENV_PREPROCESSOR_FLAVOR: &str = "IDLC_PREPROCESSOR_FLAVOR";
pub const ENV_DEFINES: &str = "IDLC_DEFINES";
pub const ENV_INCLUDE_PATHS: &str = "IDLC_INCLUDE_PATHS";
pub const ENV_VERBOSITY: &str = "IDLC_VERBOSITY";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> IdlcResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| IdlcError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| IdlcError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, project config, user config, or defaults.
///
/// The first file found wins; files are not merged. An explicit file must
/// exist. Environment overrides are applied on top.
pub fn load_or_default(
    project_root: Option<&Path>,
    explicit: Option<&Path>,
) -> IdlcResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match config_file(project_root, explicit) {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

fn config_file(project_root: Option<&Path>, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .filter(|path| path.is_file());
    if project.is_some() {
        return project;
    }

    user_config_dir()
        .map(|dir| dir.join(USER_CONFIG_PATH))
        .filter(|path| path.is_file())
}

/// Apply environment variable overrides (IDLC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |var| std::env::var(var).ok(), &mut std::io::stderr())
}

/// Apply overrides read through `lookup`; invalid values are reported to
/// `warnings` and leave the setting unchanged. Empty values count as unset.
pub fn with_env_overrides_from<F, W>(mut config: Config, lookup: F, warnings: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

    // IDLC_PREPROCESSOR
    if let Some(path) = get(ENV_PREPROCESSOR) {
        config.preprocessor.path = Some(PathBuf::from(path));
    }

    // IDLC_PREPROCESSOR_FLAVOR
    if let Some(flavor) = get(ENV_PREPROCESSOR_FLAVOR) {
        let validator = EnvVarValidator::new(ENV_PREPROCESSOR_FLAVOR, PreprocessorFlavor::NAMES);
        config.preprocessor.flavor = validator.parse_with_writer(
            &flavor,
            |s| PreprocessorFlavor::parse(s).map(Some),
            config.preprocessor.flavor,
            warnings,
        );
    }

    // IDLC_DEFINES (whitespace-separated)
    if let Some(defines) = get(ENV_DEFINES) {
        config.preprocessor.defines = split_tokens(&defines);
    }

    // IDLC_INCLUDE_PATHS (whitespace-separated)
    if let Some(paths) = get(ENV_INCLUDE_PATHS) {
        config.preprocessor.include_paths = split_tokens(&paths);
    }

    // IDLC_VERBOSITY
    if let Some(verbosity) = get(ENV_VERBOSITY) {
        let validator = EnvVarValidator::new(ENV_VERBOSITY, Verbosity::NAMES);
        config.output.verbosity = validator.parse_with_writer(
            &verbosity,
            Verbosity::parse,
            config.output.verbosity,
            warnings,
        );
    }

    config
}

/// Split a whitespace-delimited list into its non-empty tokens.
pub fn split_tokens(list: &str) -> Vec<String> {
    list.split_whitespace().map(str::to_string).collect()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "preprocessor",
        "path",
        "flavor",
        "defines",
        "include_paths",
        "output",
        "verbosity",
        "json",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
