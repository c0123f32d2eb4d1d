//! Tests for the config module

use super::loader::apply_overrides;
use super::types::*;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.collection.format, CollectionFormat::Auto);
    assert!(config.collection.source.is_none());
    assert_eq!(config.run.command, "pytest -q");
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[collection]
source = "collected.txt"
format = "node-ids"

[snapshots]
path = "/tmp/picktest/snapshots.toml"

[output]
verbosity = "verbose"
color = "never"
unicode = false

[run]
command = "python -m pytest -x"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.collection.source, Some(PathBuf::from("collected.txt")));
    assert_eq!(config.collection.format, CollectionFormat::NodeIds);
    assert_eq!(
        config.snapshots_path(),
        PathBuf::from("/tmp/picktest/snapshots.toml")
    );
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.unicode);
    assert_eq!(config.run.command, "python -m pytest -x");
}

#[test]
fn test_snapshots_path_default() {
    let path = Config::default().snapshots_path();
    assert!(path.ends_with(".picktest/snapshots.toml"));
}

#[test]
fn test_env_overrides() {
    let config = apply_overrides(
        Config::default(),
        env(&[
            ("PICKTEST_SOURCE", "-"),
            ("PICKTEST_FORMAT", "json"),
            ("PICKTEST_SNAPSHOTS", "/tmp/s.toml"),
            ("PICKTEST_RUN_COMMAND", "tox -e py --"),
            ("PICKTEST_VERBOSITY", "debug"),
            ("PICKTEST_COLOR", "always"),
        ]),
    );

    assert_eq!(config.collection.source, Some(PathBuf::from("-")));
    assert_eq!(config.collection.format, CollectionFormat::Json);
    assert_eq!(config.snapshots.path, Some(PathBuf::from("/tmp/s.toml")));
    assert_eq!(config.run.command, "tox -e py --");
    assert_eq!(config.output.verbosity, Verbosity::Debug);
    assert_eq!(config.output.color, ColorMode::Always);
}

#[test]
fn test_env_overrides_ignore_blank_and_unknown_values() {
    let config = apply_overrides(
        Config::default(),
        env(&[
            ("PICKTEST_SOURCE", ""),
            ("PICKTEST_FORMAT", "yaml"),
            ("PICKTEST_RUN_COMMAND", "   "),
        ]),
    );

    assert!(config.collection.source.is_none());
    assert_eq!(config.collection.format, CollectionFormat::Auto);
    assert_eq!(config.run.command, "pytest -q");
}

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(&path, "[run]\ncomand = \"pytest\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(config.run.command, "pytest -q");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "comand");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, Some("command".to_string()));
    assert!(warnings[0].to_string().contains("did you mean 'command'?"));
}

#[test]
fn test_config_load_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(&path, "[output]\ncolor = \"sometimes\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("invalid configuration"));
}

#[test]
fn test_project_config_is_found_in_root() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(super::PROJECT_CONFIG_FILE),
        "[collection]\nformat = \"json\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::load_or_default(Some(dir.path()));
    assert!(warnings.is_empty());
    assert_eq!(config.collection.format, CollectionFormat::Json);
}
