use std::fs;
use workoutlog_core::{load_config, AppConfig};

#[test]
fn test_missing_config_gives_defaults() {
    let cfg = load_config("tests/does_not_exist.json").expect("default config");
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.initial_zoom, 13);
    assert_eq!(cfg.storage_key, "workouts");
}

#[test]
fn test_config_from_file() {
    let path = "tests/tmp_config.json";
    fs::write(
        path,
        r#"{ "storage_key": "mapty", "restore_markers": true, "popup": { "max_width": 300 } }"#,
    )
    .expect("kunne ikke skrive config");

    let cfg = load_config(path).expect("kunne ikke laste config");
    assert_eq!(cfg.storage_key, "mapty");
    assert!(cfg.restore_markers);
    assert_eq!(cfg.popup.max_width, 300);
    assert_eq!(cfg.popup.min_width, 100);
    assert_eq!(cfg.pan_duration_secs, 1.0);

    fs::remove_file(path).ok();
}

#[test]
fn test_malformed_config_is_an_error() {
    let path = "tests/tmp_config_bad.json";
    fs::write(path, "{ initial_zoom: ").expect("skriv");

    let err = load_config(path).unwrap_err();
    assert!(format!("{:#}", err).contains("ugyldig config"));

    fs::remove_file(path).ok();
}
