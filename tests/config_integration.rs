//! Integration tests for the widget-config crate.

use std::fs;

use tempfile::TempDir;
use widget_config::{ConfigError, DEFAULT_GROUP_ID, WidgetConfig};
use widget_store::FileStore;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("widget.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Must match the host app's writer
            group_id: "group.com.acme.todo",
            display_name: "acme",
            store_dir: "/tmp/acme-shared",
        }
        "#,
    )
    .unwrap();

    let config = WidgetConfig::load_from(&config_path).unwrap();

    assert_eq!(config.group_id, "group.com.acme.todo");
    assert_eq!(config.display_name, "acme");
    assert_eq!(config.kind, "widget");
    assert_eq!(config.entry_surface, "main");
    assert_eq!(
        config.store_dir.as_deref(),
        Some(std::path::Path::new("/tmp/acme-shared"))
    );
}

#[test]
fn config_load_from_plain_json() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("widget.json");
    fs::write(&config_path, r#"{"entry_surface": "TodoActivity"}"#).unwrap();

    let config = WidgetConfig::load_from(&config_path).unwrap();

    assert_eq!(config.group_id, DEFAULT_GROUP_ID);
    assert_eq!(config.entry_surface, "TodoActivity");
}

#[test]
fn config_rejects_path_like_group() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("widget.json5");
    fs::write(&config_path, r#"{ group_id: "../escape" }"#).unwrap();

    let err = WidgetConfig::load_from(&config_path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidIdentity {
            field: "group_id",
            ..
        }
    ));
}

#[test]
fn config_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = WidgetConfig::load_from(dir.path().join("absent.json5")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn configured_store_dir_and_group_locate_the_file() {
    let dir = TempDir::new().unwrap();
    let mut config = WidgetConfig::default();
    let store_dir = dir.path().to_string_lossy().into_owned();
    config.apply_overrides(|name| match name {
        "TODO_WIDGET_STORE_DIR" => Some(store_dir.clone()),
        "TODO_WIDGET_GROUP_ID" => Some("group.com.acme.todo".to_string()),
        _ => None,
    });

    let store_dir = config.store_dir.as_deref().unwrap();
    let store = FileStore::with_path(store_dir, &config.group_id).unwrap();

    assert_eq!(store.path(), dir.path().join("group.com.acme.todo.json"));
}
