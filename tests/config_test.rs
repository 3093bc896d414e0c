use helm_scaffold::config::{get_config, load_config, parse_config, Config};
use helm_scaffold::constants::{CONFIG_FILES, DEFAULT_PATTERN};
use helm_scaffold::error::Error;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_parse_json_config() {
    let config = parse_config(
        r#"{"templatesDir": "/library", "defaults": {"TEAM": "platform", "OWNER": "ops"}}"#,
    )
    .unwrap();

    assert_eq!(config.templates_dir, Some(PathBuf::from("/library")));
    assert_eq!(config.pattern, DEFAULT_PATTERN);
    let keys: Vec<&str> = config.defaults.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["TEAM", "OWNER"]);
}

#[test]
fn test_parse_yaml_config() {
    let config = parse_config("templatesDir: ./library\npattern: '<<(\\w+)>>'\n").unwrap();

    assert_eq!(config.templates_dir, Some(PathBuf::from("./library")));
    assert_eq!(config.pattern, r"<<(\w+)>>");
    assert!(config.defaults.is_empty());
}

#[test]
fn test_parse_invalid_config() {
    let result = parse_config("templatesDir: [unclosed");
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_missing_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    assert_eq!(load_config(temp_dir.path(), &CONFIG_FILES).unwrap(), None);
    assert_eq!(get_config(temp_dir.path()).unwrap(), Config::default());
}

#[test]
fn test_config_file_lookup_order() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".helm-scaffold.yaml"), "templatesDir: yaml\n").unwrap();
    std::fs::write(temp_dir.path().join(".helm-scaffold.json"), r#"{"templatesDir": "json"}"#)
        .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.templates_dir, Some(temp_dir.path().join("json")));
}

#[test]
fn test_templates_dir_relative_to_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let absolute = temp_dir.path().join("shared");
    std::fs::write(temp_dir.path().join(".helm-scaffold.yml"), "templatesDir: lib
").unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.templates_dir, Some(temp_dir.path().join("lib")));

    std::fs::write(
        temp_dir.path().join(".helm-scaffold.json"),
        serde_json::json!({ "templatesDir": absolute.clone() }).to_string(),
    )
    .unwrap();
    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.templates_dir, Some(absolute));
}

#[test]
fn test_templates_dir_required() {
    assert!(matches!(Config::default().templates_dir(), Err(Error::ConfigError(_))));

    let config = Config { templates_dir: Some(PathBuf::from("lib")), ..Config::default() };
    assert_eq!(config.templates_dir().unwrap(), Path::new("lib"));
}
