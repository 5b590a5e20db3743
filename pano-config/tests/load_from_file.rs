use std::fs;
use std::path::Path;

use pano_config::{LoadError, load_from_file, load_with_env};
use pano_core::{CanvasConfig, ConfigError};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write config");
    path
}

fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn toml_file_is_merged_over_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(
        &dir,
        "pano.toml",
        r#"
columns = 5
gap = 24.0
countdown_secs = 5
"#,
    );
    let config = load_with_env(Some(&path), env(&[])).expect("load");
    assert_eq!(config.columns, 5);
    assert_eq!(config.gap, 24.0);
    assert_eq!(config.countdown_secs, 5);
    assert_eq!(config.buffer_zone, CanvasConfig::default().buffer_zone);
}

#[test]
fn environment_wins_over_the_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "pano.toml", "columns = 5\ngap = 24.0\n");
    let config = load_with_env(
        Some(&path),
        env(&[("PANO_COLUMNS", "2"), ("PANO_MAX_SCROLL_SPEED", "10")]),
    )
    .expect("load");
    assert_eq!(config.columns, 2);
    assert_eq!(config.gap, 24.0);
    assert_eq!(config.max_scroll_speed, 10.0);
}

#[test]
fn json_files_are_accepted() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "pano.json", r#"{ "columns": 3, "drag_ease": 0.5 }"#);
    let config = load_from_file(&path).expect("json");
    assert_eq!(config.columns, 3);
    assert_eq!(config.drag_ease, 0.5);

    let broken = write(&dir, "broken.json", "{ columns = 3 }");
    assert!(matches!(
        load_from_file(&broken),
        Err(LoadError::ParseJson { .. })
    ));
}

#[test]
fn missing_file_reports_the_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.toml");
    match load_from_file(&path) {
        Err(LoadError::Io { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "pano.toml", "columns = \"many\"\n");
    let err = load_with_env(Some(&path), env(&[])).unwrap_err();
    match err {
        LoadError::Parse { origin, .. } => {
            assert!(Path::new(&origin).ends_with("pano.toml"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn out_of_range_file_values_fail_validation() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "pano.toml", "min_columns = 4\nmax_columns = 2\n");
    let err = load_with_env(Some(&path), env(&[])).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Invalid(ConfigError::ColumnBoundsInverted { min: 4, max: 2 })
    ));
}
