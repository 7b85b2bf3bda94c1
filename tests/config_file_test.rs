//! Tests for loading session configuration from disk.

use std::io::Write;

use cargo_bay::{GameConfig, build_store};
use cargo_bay_store::{Action, GameItem};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
seed = 42
search_target = "Water"
history_limit = 3
log_file = "cargo_bay.log"
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(*config.search_target(), GameItem::Water);
    assert_eq!(*config.history_limit(), 3);
    assert_eq!(
        config.log_file().as_deref(),
        Some(std::path::Path::new("cargo_bay.log"))
    );
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = \"not a number\"").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_seeded_config_builds_reproducible_store() {
    let config = GameConfig::from_toml_str("seed = 5\nhistory_limit = 2").unwrap();

    let play = |config: &GameConfig| {
        let mut store = build_store(config);
        store.dispatch(Action::StartGame).unwrap();
        store.dispatch(Action::InitializeContainers { count: 12 }).unwrap();
        store.dispatch(Action::RandomlyPlaceItems).unwrap();
        store
    };

    let a = play(&config);
    let b = play(&config);
    assert_eq!(a.state(), b.state());
    assert_eq!(a.undo_depth(), 2);
}
