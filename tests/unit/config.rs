use super::*;

#[test]
fn empty_json_gives_defaults() {
    let cfg: PipelineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, PipelineConfig::default());
    assert_eq!(cfg.fps.get(), 1);
    assert_eq!(cfg.style.canvas.width, 1280);
    assert_eq!(cfg.style.canvas.height, 720);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_overrides_selected_keys() {
    let cfg: PipelineConfig = serde_json::from_str(
        r#"{ "fps": 2, "dialect": "blank-line", "style": { "margin_top_px": 50.0 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.fps.get(), 2);
    assert_eq!(cfg.dialect, Dialect::BlankLine);
    assert_eq!(cfg.style.margin_top_px, 50.0);
    assert_eq!(cfg.style.title.size_px, 60.0);
}

#[test]
fn zero_fps_and_unknown_keys_are_rejected() {
    assert!(serde_json::from_str::<PipelineConfig>(r#"{ "fps": 0 }"#).is_err());
    assert!(serde_json::from_str::<PipelineConfig>(r#"{ "fsp": 2 }"#).is_err());
}

#[test]
fn validate_rejects_zero_threads() {
    let cfg = PipelineConfig {
        threads: Some(0),
        ..PipelineConfig::default()
    };
    assert_eq!(cfg.validate().unwrap_err().kind(), "config");
}

#[test]
fn from_path_reports_missing_file_as_config_error() {
    let err = PipelineConfig::from_path("target/no/such/config.json").unwrap_err();
    assert_eq!(err.kind(), "config");
}

#[test]
fn from_path_loads_json() {
    let dir = PathBuf::from("target").join("unit_config");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cfg.json");
    std::fs::write(&path, r#"{ "output_dir": "target/unit_config/out", "parallel": true }"#)
        .unwrap();
    let cfg = PipelineConfig::from_path(&path).unwrap();
    assert!(cfg.parallel);
    assert_eq!(cfg.output_dir, PathBuf::from("target/unit_config/out"));
}
