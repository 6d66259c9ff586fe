// SPDX-License-Identifier: MPL-2.0
use squad_desk::app::config::{self, Config, DataSourceKind, DEFAULT_SEARCH_DEBOUNCE_MS};
use squad_desk::app::persisted_state::AppState;
use squad_desk::ui::theming::ThemeMode;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn config_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut original = Config::default();
    original.general.theme_mode = ThemeMode::Dark;
    original.search.debounce_ms = 150;
    original.data.source = DataSourceKind::Http;
    original.data.api_url = Some("http://localhost:8080/api".to_string());

    config::save_to_path(&original, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    assert_eq!(loaded, original);
    assert_eq!(loaded.search_debounce(), Duration::from_millis(150));
}

#[test]
fn partial_settings_fill_in_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[general]\ntheme_mode = \"light\"\n").expect("write settings");

    let loaded = config::load_from_path(&path).expect("partial config parses");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.search.debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
    assert_eq!(loaded.data.source, DataSourceKind::Mock);
}

#[test]
fn malformed_settings_load_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = 3")
        .expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

#[test]
fn missing_settings_load_defaults_silently() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().join("absent")));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}

#[test]
fn app_state_round_trips() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let state = AppState {
        sidebar_collapsed: true,
        last_team: Some("u17".to_string()),
    };

    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());
    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, state);
}

#[test]
fn corrupt_app_state_falls_back_to_default() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("state.cbor"), b"\xff\x00 definitely not cbor")
        .expect("write state");

    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, AppState::default());
    assert!(warning.is_some());
}
