//! Integration tests for configuration management

use gpa_planner::config::{Config, ConfigOverrides};
use gpa_planner::core::calendar::DEFAULT_CALENDAR;
use gpa_planner::core::models::{Semester, Term};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.calendar.summer_start_month, 6);
    assert_eq!(config.calendar.fall_start_month, 9);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
reports_dir = "./reports"

[calendar]
summer_start_month = 5
fall_start_month = 8
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "./reports");

    let calendar = config.academic_calendar();
    assert_eq!(calendar.summer_start_month, 5);
    assert_eq!(calendar.fall_start_month, 8);
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.calendar.summer_start_month, 0);
    assert_eq!(config.academic_calendar(), DEFAULT_CALENDAR);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GPA_PLANNER/test.log"

[paths]
reports_dir = "$GPA_PLANNER/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("gpaplanner"));
    assert!(!config.logging.file.contains("$GPA_PLANNER"));
    assert!(config.paths.reports_dir.ends_with("reports"));
    assert!(!config.paths.reports_dir.contains("$GPA_PLANNER"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").as_deref(), Some("true"));
    assert!(config.logging.verbose);

    config
        .set("reports-dir", "/srv/reports")
        .expect("Failed to set reports dir");
    assert_eq!(config.get("reports_dir").as_deref(), Some("/srv/reports"));

    assert!(config.set("verbose", "sometimes").is_err());
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_calendar_keys_shift_current_semester() {
    let mut config = Config::from_defaults();
    let august = chrono::NaiveDate::from_ymd_opt(2024, 8, 20).expect("valid date");

    assert_eq!(
        config.academic_calendar().semester_for(&august),
        Semester::new(2024, Term::Summer)
    );

    config
        .set("fall_start_month", "8")
        .expect("Failed to set fall start");
    assert_eq!(
        config.academic_calendar().semester_for(&august),
        Semester::new(2024, Term::Fall)
    );

    assert!(config.set("summer_start_month", "8").is_err());
    assert!(config.set("fall_start_month", "13").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config
        .set("summer_start_month", "5")
        .expect("Failed to set summer start");

    config.unset("level", &defaults).expect("Failed to unset level");
    config
        .unset("summer_start_month", &defaults)
        .expect("Failed to unset summer start");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.calendar.summer_start_month, 6);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file: PathBuf = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("fall_start_month", "10")
        .expect("Failed to set fall start");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.calendar.fall_start_month, 10);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let reports_dir = config.paths.reports_dir.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, reports_dir);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[calendar]"));
    assert!(display_str.contains("reports_dir"));
    assert!(display_str.contains("fall_start_month = 9"));
}

#[test]
fn test_merge_defaults_fills_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.calendar.fall_start_month, 9);

    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_get_gpaplanner_dir() {
    let dir = Config::get_gpaplanner_dir();

    assert!(dir.to_string_lossy().contains("gpaplanner"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
