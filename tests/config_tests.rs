// tests/config_tests.rs
mod common;

use std::fs;

use sensor_kit::config::{load, load_from, Config};
use sensor_kit::consts::{CONFIG_ENV_VAR, MAX_RING_CAPACITY};
use sensor_kit::CoreError;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.cipher.key, 3);
    assert_eq!(config.ring.capacity, 3);
    assert_eq!(config.extractor.record_delimiter, '#');
    assert_eq!(config.extractor.field_delimiter, '&');
    assert_eq!(config.extractor.unit_marker, "unit::");
    assert_eq!(config.extractor.value_marker, "value::");
    config.validate().unwrap();
}

#[test]
fn test_partial_file_keeps_defaults() {
    common::setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("sensor-kit.toml");
    fs::write(&path, "[cipher]\nkey = 7\n").unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.cipher.key, 7);
    assert_eq!(config.ring.capacity, 3);
    assert_eq!(config.extractor, Config::default().extractor);
}

#[test]
fn test_full_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("full.toml");
    fs::write(
        &path,
        r#"
[cipher]
key = 13

[extractor]
record_delimiter = ";"
field_delimiter = "|"
unit_marker = "u="
value_marker = "v="

[ring]
capacity = 16
"#,
    )
    .unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.cipher.key, 13);
    assert_eq!(config.ring.capacity, 16);
    let record = config.extractor.extract("A|u=m|v=2", "A").unwrap();
    assert_eq!((record.unit, record.value), ("m", 2));
}

#[test]
fn test_invalid_values_rejected() {
    let dir = tempdir().unwrap();

    let bad_key = dir.path().join("bad_key.toml");
    fs::write(&bad_key, "[cipher]\nkey = 27\n").unwrap();
    assert!(matches!(load_from(&bad_key), Err(CoreError::InvalidKey(27))));

    let zero_ring = dir.path().join("zero_ring.toml");
    fs::write(&zero_ring, "[ring]\ncapacity = 0\n").unwrap();
    assert!(matches!(
        load_from(&zero_ring),
        Err(CoreError::InvalidRingState(_))
    ));

    let huge_ring = dir.path().join("huge_ring.toml");
    fs::write(&huge_ring, "[ring]\ncapacity = 18446744073709551615\n").unwrap();
    assert!(load_from(&huge_ring).is_err());

    let big_ring = dir.path().join("big_ring.toml");
    fs::write(&big_ring, format!("[ring]\ncapacity = {}\n", MAX_RING_CAPACITY + 1)).unwrap();
    assert!(matches!(
        load_from(&big_ring),
        Err(CoreError::InvalidRingState(_))
    ));

    let bad_toml = dir.path().join("bad.toml");
    fs::write(&bad_toml, "[cipher\nkey = ").unwrap();
    assert!(matches!(load_from(&bad_toml), Err(CoreError::Config(_))));

    assert!(matches!(
        load_from(dir.path().join("missing.toml")),
        Err(CoreError::Io(_))
    ));
}

#[test]
fn test_global_load_reads_env_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("global.toml");
    fs::write(&path, "[ring]\ncapacity = 5\n").unwrap();
    std::env::set_var(CONFIG_ENV_VAR, &path);

    let config = load();
    assert_eq!(config.ring.capacity, 5);
    // cached for the rest of the process
    assert!(std::ptr::eq(config, load()));
}
