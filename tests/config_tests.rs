//! Configuration store tests: load, save and watermark parsing

use std::fs;
use tempfile::TempDir;
use watermark_sync::{Config, SyncError, Watermark};

fn sample() -> Config {
    let mut config = Config::new(
        "/data/incoming",
        "/mnt/mirror",
        Watermark::parse("2024-07-30 18:45:00").unwrap(),
    );
    config.exclude_patterns = vec!["*.part".to_string(), "~$*".to_string()];
    config
        .extra
        .insert("note".to_string(), serde_json::json!("scheduled hourly"));
    config
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.json");

    let config = sample();
    config.save(&path).expect("save should succeed");
    let loaded = Config::load(&path).expect("load should succeed");

    assert_eq!(loaded, config);
}

#[test]
fn test_round_trip_with_advanced_watermark() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.json");

    let advanced = sample().with_watermark(Watermark::parse("2024-07-31 06:00:00").unwrap());
    advanced.save(&path).unwrap();
    let loaded = Config::load(&path).unwrap();

    assert_eq!(loaded.last_run_time, "2024-07-31 06:00:00");
    assert_eq!(loaded.source_directory, sample().source_directory);
    assert_eq!(loaded.extra, sample().extra);
}

#[test]
fn test_save_overwrites_previous_file() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{\"stale\": true, \"padding\": \"".to_string() + &"x".repeat(4096) + "\"}")
        .unwrap();

    sample().save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert!(text.ends_with("}\n"));
}

#[test]
fn test_saved_file_is_human_readable() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.json");

    sample().save(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.contains("\n    \"source_directory\": \"/data/incoming\",\n"));
    let source_at = text.find("source_directory").unwrap();
    let destination_at = text.find("destination_directory").unwrap();
    let watermark_at = text.find("last_run_time").unwrap();
    assert!(source_at < destination_at && destination_at < watermark_at);
}

#[test]
fn test_load_accepts_byte_order_mark() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        "\u{feff}{\"source_directory\": \"C:/in\", \"destination_directory\": \"D:/out\", \"last_run_time\": \"2024-07-30 00:00:00\"}",
    )
    .unwrap();

    let config = Config::load(&path).expect("BOM should be tolerated");
    assert_eq!(config.last_run_time, "2024-07-30 00:00:00");
}

#[test]
fn test_load_rejects_invalid_json() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ \"source_directory\": ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, SyncError::ConfigParse(_)));
    assert!(!err.is_fatal());
}

#[test]
fn test_load_reports_missing_destination_key() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        "{\"source_directory\": \"/in\", \"last_run_time\": \"2024-07-30 00:00:00\"}",
    )
    .unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("destination_directory"));
}

#[test]
fn test_watermark_parse_failure_is_deferred_to_watermark() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        "{\"source_directory\": \"/in\", \"destination_directory\": \"/out\", \"last_run_time\": \"yesterday\"}",
    )
    .unwrap();

    let config = Config::load(&path).expect("load does not parse the watermark");
    let err = config.watermark().unwrap_err();
    assert!(err.is_fatal());
}
