use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = parse("").unwrap();
    assert_eq!(cfg.lingo.app_name, "lingo");
    assert_eq!(cfg.lingo.log_level, "info");
    assert_eq!(cfg.language.setting, None);
    assert_eq!(cfg.language.default_tag, "he");
    assert_eq!(cfg.language.catalog_path, "strings.json");
    assert!(cfg.language.display_prefix.is_empty());
    assert!(!cfg.telemetry.enabled);
    assert_eq!(cfg.telemetry.region, "europe-west1");
    assert_eq!(cfg.telemetry.feedback_function, "addUserFeedback2");
    assert_eq!(cfg.telemetry.timeout_secs, 15);
}

#[test]
fn test_language_section_from_toml() {
    let toml_str = r#"
        [language]
        setting = 3
        display_prefix = "."
    "#;
    let cfg = parse(toml_str).unwrap();
    assert_eq!(cfg.language.setting, Some(3));
    assert_eq!(cfg.language.display_prefix, ".");
    assert_eq!(cfg.language.default_tag, "he");
}

#[test]
fn test_feedback_url() {
    let mut t = TelemetryConfig::default();
    assert_eq!(t.feedback_url(), None);
    t.project_id = "notes-app".into();
    assert_eq!(
        t.feedback_url().as_deref(),
        Some("https://europe-west1-notes-app.cloudfunctions.net/addUserFeedback2")
    );
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = parse("[language\nsetting = ").unwrap_err();
    assert!(matches!(err, LingoError::Config(_)));
}

#[test]
fn test_load_missing_file_falls_back() {
    let cfg = load("/nonexistent/__lingo_test__/lingo.toml").unwrap();
    assert_eq!(cfg.lingo.app_name, "lingo");
}

#[test]
fn test_load_reads_file() {
    let tmp = std::env::temp_dir().join("__lingo_test_config__.toml");
    std::fs::write(&tmp, "[lingo]\napp_name = \"notes\"\n").unwrap();
    let cfg = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(cfg.lingo.app_name, "notes");
    let _ = std::fs::remove_file(&tmp);
}
