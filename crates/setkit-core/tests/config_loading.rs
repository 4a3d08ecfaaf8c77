//! Loading configuration documents from disk

use pretty_assertions::assert_eq;
use setkit_core::config::SetKitConfig;
use setkit_core::{SetKitError, UserInterfaceStyle};
use std::path::PathBuf;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("setkit-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_ron_file() {
    let path = write_temp(
        "display.ron",
        r#"(
            display: (screen_scale: 3.0, user_interface_style: dark),
            logging: (category_levels: {"setter": "trace"}, with_ansi: false),
        )"#,
    );

    let config = SetKitConfig::load(&path).unwrap();
    assert_eq!(config.display.screen_scale, 3.0);
    assert_eq!(config.display.user_interface_style, UserInterfaceStyle::Dark);
    assert_eq!(
        config.logging.category_levels.get("setter").map(String::as_str),
        Some("trace")
    );
    assert!(!config.logging.with_ansi);
    assert!(config.logging.with_target);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_json_file() {
    let path = write_temp("display.json", r#"{"display": {"screen_scale": 1.0}}"#);

    let config = SetKitConfig::load(&path).unwrap();
    assert_eq!(config.display.screen_scale, 1.0);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_unknown_extension_is_rejected() {
    let path = write_temp("display.toml", "screen_scale = 2.0");

    let err = SetKitConfig::load(&path).unwrap_err();
    assert!(matches!(err, SetKitError::Configuration { .. }));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SetKitConfig::load("/definitely/not/here.ron").unwrap_err();
    assert!(matches!(err, SetKitError::Io(_)));
}
