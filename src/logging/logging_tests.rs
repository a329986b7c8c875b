//! Tests for log path handling and subscriber initialization.

use super::*;
use serial_test::serial;
use std::fs;

#[test]
fn split_log_path_separates_directory_and_file() {
    let (dir, file) = split_log_path(Path::new("/var/log/tripline/app.log")).unwrap();
    assert_eq!(dir, PathBuf::from("/var/log/tripline"));
    assert_eq!(file, "app.log");
}

#[test]
fn split_log_path_resolves_bare_name_to_current_dir() {
    let (dir, file) = split_log_path(Path::new("tripline.log")).unwrap();
    assert_eq!(dir, PathBuf::from("."));
    assert_eq!(file, "tripline.log");
}

#[test]
fn split_log_path_rejects_path_without_file_name() {
    assert!(matches!(
        split_log_path(Path::new("/")),
        Err(LoggingError::InvalidPath(_))
    ));
}

#[test]
#[serial(tracing_init)]
fn filter_prefers_tripline_log_over_rust_log() {
    std::env::set_var(LOG_ENV_VAR, "debug");
    std::env::set_var("RUST_LOG", "error");

    let filter = filter_from_env();

    std::env::remove_var(LOG_ENV_VAR);
    std::env::remove_var("RUST_LOG");
    assert_eq!(filter.to_string(), "debug");
}

#[test]
#[serial(tracing_init)]
fn filter_defaults_to_info() {
    std::env::remove_var(LOG_ENV_VAR);
    std::env::remove_var("RUST_LOG");

    assert_eq!(filter_from_env().to_string(), DEFAULT_FILTER);
}

#[test]
#[serial(tracing_init)]
fn init_creates_log_directory_if_missing() {
    let test_dir = std::env::temp_dir().join("tripline_test_logs_create");
    let log_file = test_dir.join("test.log");
    let _ = fs::remove_dir_all(&test_dir);

    // May fail with SubscriberAlreadySet when another test got there first
    let _ = init(&log_file);

    assert!(
        test_dir.exists(),
        "Log directory should be created: {:?}",
        test_dir
    );

    let _ = fs::remove_dir_all(&test_dir);
}

#[test]
#[serial(tracing_init)]
fn second_init_reports_subscriber_already_set() {
    let test_dir = std::env::temp_dir().join("tripline_test_logs_twice");
    let log_file = test_dir.join("twice.log");

    let _ = init(&log_file);
    let second = init(&log_file);

    assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));

    let _ = fs::remove_dir_all(&test_dir);
}
