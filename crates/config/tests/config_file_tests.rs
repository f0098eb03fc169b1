//! Configuration file loading tests.

use neo_invoke_config::{ConfigError, InvokerConfig, LogFormat};
use neo_invoke_core::Fixed8;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = InvokerConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, InvokerConfig::default());
}

#[test]
fn test_load_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invoke.toml");
    fs::write(
        &path,
        r#"
[fees]
min_network_fee = "0.002"
free_gas_allowance = "10"

[logger]
level = "debug,neo_invoke=trace"
format = "json"
"#,
    )
    .unwrap();

    let config = InvokerConfig::load(&path).unwrap();
    assert_eq!(config.fees.min_network_fee, Fixed8::from_raw(200_000));
    assert_eq!(config.fees.free_gas_allowance, Fixed8::from_units(10));
    assert_eq!(config.logger.level, "debug,neo_invoke=trace");
    assert_eq!(config.logger.format, LogFormat::Json);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invoke.toml");
    fs::write(&path, "[fees]\nmin_network_fee = \"lots\"\n").unwrap();

    assert!(matches!(
        InvokerConfig::load(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_written_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invoke.toml");

    let mut config = InvokerConfig::default();
    config.fees.free_gas_allowance = Fixed8::from_units(7);
    fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    assert_eq!(InvokerConfig::load(&path).unwrap(), config);
}
