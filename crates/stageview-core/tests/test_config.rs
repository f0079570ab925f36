use stageview_core::config::{load_config, ViewerConfig};
use stageview_core::error::StageviewError;
use stageview_core::geometry::Dimensions;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    let config = ViewerConfig::default();
    config.validate().unwrap();
    assert_eq!(
        config.stage.dimensions(),
        Dimensions {
            width: 800.0,
            height: 600.0
        }
    );
    assert!(config.zoom.step_factor > 1.0);
    assert!(config.zoom.require_modifier);
    assert!(config.pan.quiescence_ms >= 100);
}

#[test]
fn test_default_config_display() {
    let s = format!("{}", ViewerConfig::default());
    assert!(s.contains("800x600"), "got: {s}");
    assert!(s.contains("250ms"), "got: {s}");
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_toml_roundtrip_preserves_values() {
    let mut config = ViewerConfig::default();
    config.stage.width = 1024.0;
    config.zoom.step_factor = 1.25;
    config.pan.quiescence_ms = 400;

    let text = config.to_toml().unwrap();
    let parsed = ViewerConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let parsed = ViewerConfig::from_toml_str("[zoom]\nstep_factor = 1.5\n").unwrap();
    assert_eq!(parsed.zoom.step_factor, 1.5);
    assert_eq!(parsed.stage, ViewerConfig::default().stage);
    assert_eq!(parsed.pan, ViewerConfig::default().pan);
    assert_eq!(parsed.zoom.max_relative, ViewerConfig::default().zoom.max_relative);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(ViewerConfig::from_toml_str("").unwrap(), ViewerConfig::default());
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = ViewerConfig::from_toml_str("[stage\nwidth = ").unwrap_err();
    assert!(matches!(err, StageviewError::ConfigParse(_)), "got: {err}");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_rejects_zoom_step_not_above_one() {
    let mut config = ViewerConfig::default();
    config.zoom.step_factor = 1.0;
    assert!(matches!(config.validate(), Err(StageviewError::InvalidConfig(_))));
}

#[test]
fn test_rejects_degenerate_stage() {
    let err = ViewerConfig::from_toml_str("[stage]\nwidth = 0.0\nheight = 600.0\n").unwrap_err();
    assert!(matches!(err, StageviewError::InvalidConfig(_)), "got: {err}");
}

#[test]
fn test_rejects_inverted_zoom_bounds() {
    let mut config = ViewerConfig::default();
    config.zoom.min_relative = 2.0;
    assert!(config.validate().is_err());

    let mut config = ViewerConfig::default();
    config.zoom.max_relative = 0.5;
    assert!(config.validate().is_err());

    let mut config = ViewerConfig::default();
    config.zoom.min_relative = 0.0;
    assert!(config.validate().is_err());
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stageview.toml");
    std::fs::write(&path, "[pan]\nquiescence_ms = 500\n").unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.pan.quiescence_ms, 500);
}

#[test]
fn test_load_config_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, StageviewError::Io(_)), "got: {err}");
}
