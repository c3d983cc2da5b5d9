// Config loading and validation tests

use socdash::config::AppConfig;
use socdash::display::Slot;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[publishing]
broadcast_capacity = 256

[scheduler]
clock_interval_ms = 1000
metrics_interval_ms = 5000
synthetic_alert_interval_ms = 15000
auto_refresh_interval_ms = 10000
analysis_duration_ms = 3000

[animation]
duration_ms = 2000
frame_interval_ms = 16

[notifications]
visible_ms = 3000
fade_out_ms = 300

[feed]
max_entries = 10

[monitoring]
stats_log_interval_secs = 60
"#;

const MINIMAL_CONFIG: &str = r#"
[server]
port = 9000
host = "127.0.0.1"

[publishing]
broadcast_capacity = 16
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.publishing.broadcast_capacity, 256);
    assert_eq!(config.scheduler.metrics_interval_ms, 5000);
    assert_eq!(config.scheduler.synthetic_alert_interval_ms, 15000);
    assert_eq!(config.animation.duration_ms, 2000);
    assert_eq!(config.notifications.fade_out_ms, 300);
    assert_eq!(config.feed.max_entries, 10);
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let config = AppConfig::load_from_str(MINIMAL_CONFIG).expect("minimal");
    assert_eq!(config.scheduler.clock_interval_ms, 1000);
    assert_eq!(config.scheduler.auto_refresh_interval_ms, 10_000);
    assert_eq!(config.scheduler.analysis_duration_ms, 3000);
    assert!(!config.scheduler.auto_refresh_on_start);
    assert!(config.scheduler.random_seed.is_none());
    assert_eq!(config.notifications.visible_ms, 3000);
    assert_eq!(config.feed.max_entries, 10);
    assert_eq!(config.display.slots.len(), Slot::ALL.len());
    assert_eq!(config.monitoring.stats_log_interval_secs, 60);
}

#[test]
fn test_config_display_slots_parse_camel_case() {
    let s = format!(
        "{}\n[display]\nslots = [\"currentTime\", \"totalEvents\"]\n",
        MINIMAL_CONFIG
    );
    let config = AppConfig::load_from_str(&s).expect("slots");
    assert_eq!(config.display.slots, vec![Slot::CurrentTime, Slot::TotalEvents]);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_broadcast_capacity_zero() {
    let bad = VALID_CONFIG.replace("broadcast_capacity = 256", "broadcast_capacity = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("broadcast_capacity"));
}

#[test]
fn test_config_validation_rejects_zero_intervals() {
    for (field, line) in [
        ("clock_interval_ms", "clock_interval_ms = 1000"),
        ("metrics_interval_ms", "metrics_interval_ms = 5000"),
        ("synthetic_alert_interval_ms", "synthetic_alert_interval_ms = 15000"),
        ("auto_refresh_interval_ms", "auto_refresh_interval_ms = 10000"),
        ("frame_interval_ms", "frame_interval_ms = 16"),
        ("visible_ms", "visible_ms = 3000"),
        ("stats_log_interval_secs", "stats_log_interval_secs = 60"),
    ] {
        let bad = VALID_CONFIG.replace(line, &format!("{} = 0", field));
        let err = AppConfig::load_from_str(&bad).unwrap_err();
        assert!(
            err.to_string().contains(field),
            "expected error naming {}, got {}",
            field,
            err
        );
    }
}

#[test]
fn test_config_validation_rejects_max_entries_zero() {
    let bad = VALID_CONFIG.replace("max_entries = 10", "max_entries = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("feed.max_entries"));
}

#[test]
fn test_config_validation_rejects_empty_slot_list() {
    let bad = format!("{}\n[display]\nslots = []\n", MINIMAL_CONFIG);
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("display.slots"));
}

#[test]
fn test_config_rejects_unknown_slot_name() {
    let bad = format!("{}\n[display]\nslots = [\"sidebar\"]\n", MINIMAL_CONFIG);
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.feed.max_entries, 10);
}
