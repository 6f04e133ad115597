use rcountdown::config::Config;
use rcountdown::config::migrate::{migrate_config_file, missing_keys};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rcountdown.conf", name));
    fs::write(&path, content).expect("write conf");
    path
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let path = temp_conf("defaults", "database: /tmp/x.sqlite\n");
    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.default_duration_seconds, 240);
    assert_eq!(cfg.progress_bar_width, 30);
    assert!(cfg.show_progress_bar);
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let path = env::temp_dir().join("does_not_exist_rcountdown.conf");
    fs::remove_file(&path).ok();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.default_duration_seconds, 240);
    assert!(cfg.database.ends_with("rcountdown.sqlite"));
}

#[test]
fn test_check_and_migrate_config() {
    let path = temp_conf(
        "migrate",
        "database: /tmp/y.sqlite\ndefault_duration_seconds: 600\n",
    );

    let missing = missing_keys(&path).unwrap();
    assert_eq!(missing, vec!["progress_bar_width", "show_progress_bar"]);

    assert!(migrate_config_file(&path).unwrap());
    assert!(missing_keys(&path).unwrap().is_empty());

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.default_duration_seconds, 600);
    assert_eq!(cfg.database, "/tmp/y.sqlite");

    // second run has nothing to do
    assert!(!migrate_config_file(&path).unwrap());
}

#[test]
fn test_invalid_yaml_is_a_config_error() {
    let path = temp_conf("invalid", "database: [unterminated\n");
    assert!(Config::load_from(&path).is_err());
}
