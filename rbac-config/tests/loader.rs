use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use rbac_config::sources::EnvConfig;
use rbac_config::{ConfigLoadError, ConfigLoader, ConfigOverrides, ConfigGuardRailError};
use rbac_core::store::IdStrategy;
use tempfile::tempdir;

fn isolated() -> ConfigLoader {
    ConfigLoader::new().with_env(EnvConfig::default())
}

#[test]
fn defaults_without_file_warn_about_missing_config() {
    let load = isolated().load().unwrap();

    assert_eq!(load.config.api.latency, Duration::from_millis(500));
    assert_eq!(load.config.store.id_strategy, IdStrategy::Monotonic);
    assert!(load.config.store.seed);
    assert_eq!(load.config.logging.filter, "info");
    assert!(load.config_path().is_none());
    assert_eq!(load.warnings.len(), 1);
    assert!(load.warnings.items[0].message.contains("rbac-admin.toml"));
}

#[test]
fn file_values_apply_and_env_wins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rbac-admin.toml");
    fs::write(
        &path,
        r#"
[api]
latency = "250ms"

[store]
id_strategy = "count_plus_one"
seed = false

[logging]
filter = "rbac_core=debug"
"#,
    )
    .unwrap();

    let load = isolated().with_config_path(&path).load().unwrap();
    assert_eq!(load.config.api.latency, Duration::from_millis(250));
    assert_eq!(load.config.store.id_strategy, IdStrategy::CountPlusOne);
    assert!(!load.config.store.seed);
    assert_eq!(load.config.logging.filter, "rbac_core=debug");
    assert_eq!(load.config_path(), Some(path.as_path()));
    // count_plus_one is allowed but flagged
    assert_eq!(load.warnings.len(), 1);
    assert!(load.warnings.items[0].hint.is_some());

    let env = EnvConfig {
        latency: Some("2s".into()),
        seed: Some(true),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new()
        .with_env(env)
        .with_config_path(&path)
        .load()
        .unwrap();
    assert_eq!(load.config.api.latency, Duration::from_secs(2));
    assert!(load.config.store.seed);
    assert_eq!(load.config.store.id_strategy, IdStrategy::CountPlusOne);
}

#[test]
fn overrides_beat_environment() {
    let env = EnvConfig {
        latency: Some("2s".into()),
        id_strategy: Some("count_plus_one".into()),
        ..EnvConfig::default()
    };
    let overrides = ConfigOverrides {
        latency: Some(Duration::ZERO),
        id_strategy: Some(IdStrategy::Monotonic),
        seed: Some(false),
        log_filter: None,
    };

    let load = ConfigLoader::new()
        .with_env(env)
        .with_overrides(overrides)
        .load()
        .unwrap();

    assert_eq!(load.config.api.latency, Duration::ZERO);
    assert_eq!(load.config.store.id_strategy, IdStrategy::Monotonic);
    assert!(!load.config.store.seed);
}

#[test]
fn env_config_path_is_used_when_no_explicit_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[store]\nseed = false\n").unwrap();

    let env = EnvConfig {
        config_path: Some(path.clone()),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new().with_env(env).load().unwrap();

    assert!(!load.config.store.seed);
    assert!(load.warnings.is_empty());
}

#[test]
fn missing_explicit_path_is_an_error() {
    let dir = tempdir().unwrap();
    let missing: PathBuf = dir.path().join("nope.toml");

    let err = isolated().with_config_path(&missing).load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::MissingConfig { path } if path == missing));
}

#[test]
fn malformed_values_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");

    fs::write(&path, "[api]\nlatency = \"soon\"\n").unwrap();
    let err = isolated().with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::InvalidValue { key: "api.latency", .. }));

    fs::write(&path, "[store]\nid_strategy = \"random\"\n").unwrap();
    let err = isolated().with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::InvalidValue { key: "store.id_strategy", .. }));

    fs::write(&path, "[store\n").unwrap();
    let err = isolated().with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn excessive_latency_trips_the_guard_rail() {
    let env = EnvConfig {
        latency: Some("5m".into()),
        ..EnvConfig::default()
    };

    let err = ConfigLoader::new().with_env(env).load().unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::LatencyTooHigh { .. })
    ));
}
