//! CLI command integration tests
//!
//! Run with: cargo test --test cli_tests
//! Commands run against a temporary base directory; `reset` is only
//! exercised with --force since the prompt needs a terminal.

use cfgstore::cli::{commands, OutputFormat};
use cfgstore::config::{ConfigDir, ConfigStore, NoDefaults};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn load(dir: &ConfigDir, name: &str) -> ConfigStore {
    let mut store = ConfigStore::open(dir, name, false, &NoDefaults).unwrap();
    store.load().unwrap();
    store
}

#[test]
fn test_cli_create_seeds_bundled_default() {
    let tmp = TempDir::new().unwrap();
    let dir = commands::resolve_dir(Some(tmp.path().to_path_buf())).unwrap();

    commands::create(&dir, "settings", false).unwrap();

    let store = load(&dir, "settings");
    assert_eq!(store.document().unwrap()["motd"], json!("A cfgstore managed server"));
    println!("✓ CLI create seeds settings.json");
}

#[test]
fn test_cli_create_no_default() {
    let tmp = TempDir::new().unwrap();
    let dir = ConfigDir::at(tmp.path());

    commands::create(&dir, "settings", true).unwrap();

    assert_eq!(fs::read(dir.file_for("settings")).unwrap(), b"");
}

#[test]
fn test_cli_set_get_unset() {
    let tmp = TempDir::new().unwrap();
    let dir = ConfigDir::at(tmp.path());
    commands::create(&dir, "settings", false).unwrap();

    commands::set(&dir, "settings", "whitelist", "true").unwrap();
    commands::set(&dir, "settings", "owner", "Steve").unwrap();
    assert_eq!(load(&dir, "settings").document().unwrap()["whitelist"], json!(true));
    assert_eq!(load(&dir, "settings").document().unwrap()["owner"], json!("Steve"));

    commands::get(&dir, "settings", "/server/port").unwrap();
    let err = commands::get(&dir, "settings", "nope").unwrap_err();
    assert!(err.to_string().contains("not found"));

    commands::unset(&dir, "settings", "owner").unwrap();
    assert!(load(&dir, "settings").document().unwrap().get("owner").is_none());

    // unknown key is only a warning
    commands::unset(&dir, "settings", "owner").unwrap();
    println!("✓ CLI set/get/unset round trip");
}

#[test]
fn test_cli_set_on_empty_file_fails() {
    let tmp = TempDir::new().unwrap();
    let dir = ConfigDir::at(tmp.path());
    commands::create(&dir, "blank", true).unwrap();

    assert!(commands::set(&dir, "blank", "a", "1").is_err());
}

#[test]
fn test_cli_reset_force() {
    let tmp = TempDir::new().unwrap();
    let dir = ConfigDir::at(tmp.path());
    commands::create(&dir, "settings", false).unwrap();
    commands::set(&dir, "settings", "motd", "changed").unwrap();

    commands::reset(&dir, "settings", true).unwrap();

    assert_eq!(
        fs::read(dir.file_for("settings")).unwrap(),
        include_bytes!("../defaults/settings.json")
    );
}

#[test]
fn test_cli_list_and_init() {
    let tmp = TempDir::new().unwrap();
    let dir = ConfigDir::at(tmp.path());

    // no directory yet
    commands::list(&dir).unwrap();

    commands::init(&dir).unwrap();
    assert!(dir.path().is_dir());

    commands::create(&dir, "settings", false).unwrap();
    commands::list(&dir).unwrap();
    commands::path(&dir, "settings").unwrap();
    commands::defaults().unwrap();
}

#[test]
fn test_cli_read_commands_do_not_create_files() {
    let tmp = TempDir::new().unwrap();
    let dir = ConfigDir::at(tmp.path());

    let err = commands::show(&dir, "settings", OutputFormat::Json).unwrap_err();
    assert!(err.to_string().contains("does not exist"), "{}", err);
    assert!(commands::get(&dir, "settings", "motd").is_err());
    assert!(commands::set(&dir, "settings", "motd", "x").is_err());
    assert!(commands::unset(&dir, "settings", "motd").is_err());
    assert!(!dir.file_for("settings").exists());

    // the first real creation still seeds the bundled default
    commands::create(&dir, "settings", false).unwrap();
    assert_eq!(
        fs::read(dir.file_for("settings")).unwrap(),
        include_bytes!("../defaults/settings.json")
    );
    println!("✓ show before create leaves seeding intact");
}

#[test]
fn test_cli_path_rejects_escaping_name() {
    let tmp = TempDir::new().unwrap();
    let dir = ConfigDir::at(tmp.path());

    commands::path(&dir, "settings").unwrap();

    let err = commands::path(&dir, "../x").unwrap_err();
    assert!(err.to_string().contains("Invalid config name"), "{}", err);
}
