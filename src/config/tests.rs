use std::fs;

use chrono::Weekday;
use tempfile::tempdir;

use crate::monitor::ScheduleError;

use super::{ConfigError, load_config};

const SCHEDULE_TOML: &str = r#"
[thresholds]
lcca_warning = 10
lcca_critical = 5

[schedule]
exclusions = [
  [],
  [["01:00:00", "02:30:00"]],
  [],
  [],
  [],
  [["22:00:00", "23:59:59"]],
  [],
]
"#;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp = tempdir().expect("tempdir should be created");
    let path = temp.path().join("check_mirth.toml");
    fs::write(&path, contents).expect("config should be written");
    (temp, path)
}

#[test]
fn loads_thresholds_and_schedule() {
    let (_temp, path) = write_config(SCHEDULE_TOML);

    let config = load_config(&path).expect("config should load");
    let schedule = config
        .exclusion_schedule()
        .expect("schedule should compile");

    assert_eq!(config.thresholds.lcca_warning, Some(10));
    assert_eq!(config.thresholds.lcca_critical, Some(5));
    assert_eq!(config.thresholds.signature_warning, None);
    assert_eq!(schedule.window_count(), 2);
    assert_eq!(schedule.windows_for(Weekday::Sat).len(), 1);
}

#[test]
fn missing_sections_default_to_empty_schedule() {
    let (_temp, path) = write_config("");

    let config = load_config(&path).expect("empty config should load");
    let schedule = config
        .exclusion_schedule()
        .expect("default schedule should compile");

    assert!(schedule.is_empty());
    assert_eq!(config.thresholds.lcca_warning, None);
}

#[test]
fn end_before_start_is_rejected_at_load() {
    let (_temp, path) = write_config(
        r#"
[schedule]
exclusions = [[["23:00:00", "10:00:00"]], [], [], [], [], [], []]
"#,
    );

    let error = load_config(&path).expect_err("inverted window must be rejected");
    assert!(matches!(
        error,
        ConfigError::Schedule(ScheduleError::EndBeforeStart { day: "Monday", .. })
    ));
}

#[test]
fn short_week_is_rejected_at_load() {
    let (_temp, path) = write_config(
        r#"
[schedule]
exclusions = [[], [], []]
"#,
    );

    let error = load_config(&path).expect_err("three days must be rejected");
    assert!(matches!(
        error,
        ConfigError::Schedule(ScheduleError::DayCount { found: 3 })
    ));
}

#[test]
fn unknown_keys_are_parse_errors() {
    let (_temp, path) = write_config(
        r#"
[thresholds]
lcca_warnign = 10
"#,
    );

    let error = load_config(&path).expect_err("typo must be rejected");
    assert!(matches!(error, ConfigError::Parse { .. }));
}

#[test]
fn unreadable_file_is_a_read_error() {
    let temp = tempdir().expect("tempdir should be created");
    let error = load_config(temp.path().join("absent.toml")).expect_err("missing file");
    assert!(matches!(error, ConfigError::Read { .. }));
    assert!(error.to_string().contains("absent.toml"));
}
