use std::fs;
use std::path::PathBuf;

use bookshelf_catalog::config::{load_config_file, update_config_file};
use bookshelf_catalog::ConfigError;
use tempfile::TempDir;

#[test]
fn missing_config_file_is_none() {
    let tmp = TempDir::new().unwrap();
    assert!(load_config_file(&tmp.path().join("config.toml")).unwrap().is_none());
}

#[test]
fn parses_library_section() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[library]
path = "/home/ada/books/library.json"
owner = "Ada"
"#,
    )
    .unwrap();

    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(
        config.library.path,
        Some(PathBuf::from("/home/ada/books/library.json"))
    );
    assert_eq!(config.library.owner.as_deref(), Some("Ada"));
}

#[test]
fn malformed_config_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[library\npath = ").unwrap();

    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn update_merges_with_existing_values() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bookshelf").join("config.toml");

    update_config_file(&path, Some(PathBuf::from("books.json")), None).unwrap();
    update_config_file(&path, None, Some("Ada".to_string())).unwrap();

    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(config.library.path, Some(PathBuf::from("books.json")));
    assert_eq!(config.library.owner.as_deref(), Some("Ada"));
}

#[test]
fn update_replaces_malformed_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[library\npath = ").unwrap();

    update_config_file(&path, None, Some("Ada".to_string())).unwrap();

    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(config.library.owner.as_deref(), Some("Ada"));
    assert_eq!(config.library.path, None);
}
