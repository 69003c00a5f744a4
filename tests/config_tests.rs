use pathquill::config::{AccessorConfig, Mode};
use pathquill::{NestedAccessor, Value};
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = AccessorConfig::default();

    assert_eq!(config.delimiter, ".");
    assert_eq!(config.max_depth, 512);
    assert_eq!(config.read_mode, Mode::Strict);
    assert_eq!(config.write_mode, Mode::Lenient);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = AccessorConfig::from_toml_str("write_mode = \"strict\"").unwrap();

    assert_eq!(config.delimiter, ".");
    assert_eq!(config.read_mode, Mode::Strict);
    assert_eq!(config.write_mode, Mode::Strict);
}

#[test]
fn test_unknown_mode_rejected() {
    assert!(AccessorConfig::from_toml_str("read_mode = \"sometimes\"").is_err());
}

#[test]
fn test_toml_roundtrip() {
    let config = AccessorConfig {
        delimiter: "::".to_string(),
        max_depth: 16,
        read_mode: Mode::Lenient,
        write_mode: Mode::Strict,
    };

    let text = config.to_toml_string().unwrap();
    assert!(text.contains("read_mode = \"lenient\""));
    assert_eq!(AccessorConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AccessorConfig::load_from(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AccessorConfig::default());
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("pathquill.toml");

    let config = AccessorConfig {
        delimiter: "/".to_string(),
        ..AccessorConfig::default()
    };
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(AccessorConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_load_invalid_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "delimiter = [").unwrap();

    let err = AccessorConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_loaded_config_drives_accessor() {
    let config = AccessorConfig::from_toml_str("delimiter = \"/\"\nread_mode = \"lenient\"").unwrap();
    let mut root = Value::Null;
    let mut accessor = NestedAccessor::with_config(&mut root, &config).unwrap();

    accessor.set("a/b", 1).unwrap();
    assert_eq!(accessor.get("a/b").unwrap(), Value::from(1));
    assert_eq!(accessor.get("a/missing").unwrap(), Value::Null);
}
