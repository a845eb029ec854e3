//! Tests for the config module

use super::loader::{load_or_default, with_env_overrides_from};
use super::types::*;
use crate::domain::value_objects::PreprocessorFlavor;
use crate::error::IdlcError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn env_overrides(config: Config, vars: &[(&str, &str)]) -> (Config, String) {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let mut warnings = Vec::new();
    let config = with_env_overrides_from(config, |var| vars.get(var).cloned(), &mut warnings);
    (config, String::from_utf8(warnings).unwrap())
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.preprocessor.path, None);
    assert_eq!(config.preprocessor.flavor, None);
    assert!(config.preprocessor.defines.is_empty());
    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert!(!config.output.json);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[preprocessor]
path = "/usr/bin/cpp"
flavor = "gcc"
defines = ["DEBUG", "VERSION=2"]
include_paths = ["idl/common", "/opt/idl"]

[output]
verbosity = "verbose"
json = true
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.preprocessor.path, Some(PathBuf::from("/usr/bin/cpp")));
    assert_eq!(config.preprocessor.flavor, Some(PreprocessorFlavor::Gcc));
    assert_eq!(config.preprocessor.defines, ["DEBUG", "VERSION=2"]);
    assert_eq!(config.preprocessor.include_paths, ["idl/common", "/opt/idl"]);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert!(config.output.json);
}

#[test]
fn test_verbosity_levels() {
    assert_eq!(Verbosity::Quiet.level_filter(), log::LevelFilter::Error);
    assert_eq!(Verbosity::Normal.level_filter(), log::LevelFilter::Warn);
    assert_eq!(Verbosity::Debug.level_filter(), log::LevelFilter::Debug);

    assert_eq!(Verbosity::Quiet.raised_by(0), Verbosity::Quiet);
    assert_eq!(Verbosity::Normal.raised_by(1), Verbosity::Verbose);
    assert_eq!(Verbosity::Normal.raised_by(3), Verbosity::Debug);
}

#[test]
fn test_env_override_lists_split_on_whitespace() {
    let (config, warnings) = env_overrides(
        Config::default(),
        &[
            ("IDLC_DEFINES", "  A  B=1\tC "),
            ("IDLC_INCLUDE_PATHS", "/x /y"),
        ],
    );

    assert_eq!(config.preprocessor.defines, ["A", "B=1", "C"]);
    assert_eq!(config.preprocessor.include_paths, ["/x", "/y"]);
    assert!(warnings.is_empty());
}

#[test]
fn test_env_override_replaces_file_lists() {
    let mut config = Config::default();
    config.preprocessor.defines = vec!["FROM_FILE".to_string()];

    let (config, _) = env_overrides(config, &[("IDLC_DEFINES", "FROM_ENV")]);

    assert_eq!(config.preprocessor.defines, ["FROM_ENV"]);
}

#[test]
fn test_env_override_empty_values_are_unset() {
    let mut config = Config::default();
    config.preprocessor.defines = vec!["KEEP".to_string()];

    let (config, _) = env_overrides(config, &[("IDLC_DEFINES", "   "), ("IDLC_PREPROCESSOR", "")]);

    assert_eq!(config.preprocessor.defines, ["KEEP"]);
    assert_eq!(config.preprocessor.path, None);
}

#[test]
fn test_env_override_preprocessor_and_flavor() {
    let (config, _) = env_overrides(
        Config::default(),
        &[
            ("IDLC_PREPROCESSOR", "/usr/bin/cpp"),
            ("IDLC_PREPROCESSOR_FLAVOR", "GCC"),
            ("IDLC_VERBOSITY", "debug"),
        ],
    );

    assert_eq!(config.preprocessor.path, Some(PathBuf::from("/usr/bin/cpp")));
    assert_eq!(config.preprocessor.flavor, Some(PreprocessorFlavor::Gcc));
    assert_eq!(config.output.verbosity, Verbosity::Debug);
}

#[test]
fn test_env_override_invalid_flavor_keeps_current_value() {
    let mut config = Config::default();
    config.preprocessor.flavor = Some(PreprocessorFlavor::Ucpp);

    let (config, warnings) = env_overrides(config, &[("IDLC_PREPROCESSOR_FLAVOR", "gc")]);

    assert_eq!(config.preprocessor.flavor, Some(PreprocessorFlavor::Ucpp));
    assert!(warnings.contains("IDLC_PREPROCESSOR_FLAVOR"), "{warnings}");
    assert!(warnings.contains("did you mean 'gcc'?"), "{warnings}");
}

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idlc.toml");

    fs::write(&path, "[preprocessor]\ndefnes = [\"A\"]\n").unwrap();

    let (_config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "defnes");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, Some("defines".to_string()));
}

#[test]
fn test_config_load_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idlc.toml");
    fs::write(&path, "[preprocessor\n").unwrap();

    let err = Config::load(&path).unwrap_err();

    assert!(matches!(err, IdlcError::Config { .. }));
    assert_eq!(err.exit_code(), crate::error::CONFIG_EXIT_CODE);
}

#[test]
fn test_config_load_wrong_type_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idlc.toml");
    fs::write(&path, "[preprocessor]\nflavor = \"mcpp\"\n").unwrap();

    assert!(matches!(
        Config::load(&path).unwrap_err(),
        IdlcError::Config { .. }
    ));
}

#[test]
fn test_load_or_default_reads_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("idlc.toml"),
        "[preprocessor]\ninclude_paths = [\"common\"]\n",
    )
    .unwrap();

    let (config, warnings) = load_or_default(Some(dir.path()), None).unwrap();

    assert_eq!(config.preprocessor.include_paths, ["common"]);
    assert!(warnings.is_empty());
}

#[test]
fn test_load_or_default_prefers_explicit_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("idlc.toml"), "[output]\njson = false\n").unwrap();
    let explicit = dir.path().join("ci.toml");
    fs::write(&explicit, "[output]\njson = true\n").unwrap();

    let (config, _) = load_or_default(Some(dir.path()), Some(explicit.as_path())).unwrap();

    assert!(config.output.json);
}

#[test]
fn test_load_or_default_missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();

    let err = load_or_default(None, Some(dir.path().join("nope.toml").as_path())).unwrap_err();

    assert!(matches!(err, IdlcError::Config { .. }));
}
