mod common;

use common::temp_config;
use hexlens::config::{Config, ConfigError, CopyMode, SearchMode};
use hexlens::viewer::Settings;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.layout.columns, None);
    assert_eq!(config.layout.cell_width_px, 24);
    assert_eq!(config.layout.row_height_px, 20);
    assert_eq!(config.layout.overscan_count, 2);
    assert_eq!(config.layout.wheel_step, 1);
    assert_eq!(config.offsets.base, 16);
    assert_eq!(config.offsets.width, 8);
    assert_eq!(config.copy.mode, CopyMode::Hex);
    assert_eq!(config.search.mode, SearchMode::Auto);
    assert_eq!(config.search.debounce_ms, 150);
    assert_eq!(config.input.repeat_interval_ms, 16);
    assert_eq!(config.history.capacity, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("hexlens/config.toml"));
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[layout]
columns = 8
overscan_count = 4

[copy]
mode = "text"

[search]
mode = "hex"
"#,
    );

    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.layout.columns, Some(8));
    assert_eq!(config.layout.overscan_count, 4);
    assert_eq!(config.layout.row_height_px, 20);
    assert_eq!(config.copy.mode, CopyMode::Text);
    assert_eq!(config.search.mode, SearchMode::Hex);
    assert_eq!(config.search.debounce_ms, 150);
    assert_eq!(config.offsets.base, 16);
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = temp_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    match Config::load_from(&path) {
        Err(ConfigError::ReadError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ReadError, got {:?}", other),
    }
}

#[test]
fn test_malformed_toml_reports_path() {
    let (_dir, path) = temp_config("[layout\ncolumns = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_unknown_enum_value_is_parse_error() {
    let result = Config::parse("[copy]\nmode = \"base64\"\n");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        "[offsets]\nbase = 1\n",
        "[offsets]\nbase = 37\n",
        "[offsets]\nwidth = 0\n",
        "[layout]\ncell_width_px = 0\n",
        "[layout]\nrow_height_px = 0\n",
        "[layout]\ncolumns = 0\n",
        "[history]\ncapacity = 0\n",
    ];
    for content in cases {
        let result = Config::parse(content);
        assert!(
            matches!(result, Err(ConfigError::ValidationError { .. })),
            "{:?} should fail validation",
            content
        );
    }
}

#[test]
fn test_settings_follow_config() {
    let config = Config::parse("[offsets]\nbase = 10\nwidth = 6\n[layout]\nwheel_step = 3\n")
        .expect("config should parse");
    let settings = Settings::from(&config);
    assert_eq!(settings.offset_base, 10);
    assert_eq!(settings.offset_width, 6);
    assert_eq!(settings.wheel_step, 3);
    assert_eq!(settings.columns, None);
}
