// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! Sections:
//! - `[general]` - Theme mode
//! - `[notifications]` - Toast duration and exit animation
//! - `[search]` - Search debounce window
//! - `[modal]` - Dialog exit delay
//! - `[data]` - Data source selection (mock or HTTP)
//!
//! A missing file silently yields defaults. An unreadable one yields defaults
//! plus a warning string the shell shows as a toast. The directory follows
//! [`paths`](crate::app::paths).
//!
//! # Examples
//!
//! ```no_run
//! use squad_desk::app::config;
//! use squad_desk::ui::theming::ThemeMode;
//!
//! let (mut config, _warning) = config::load();
//! config.general.theme_mode = ThemeMode::Dark;
//! config::save(&config).expect("settings written");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Which adapter backs the data port.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DataSourceKind {
    /// Built-in fixtures served after a fixed delay.
    #[default]
    Mock,
    /// JSON over HTTP against `[data] api_url`.
    Http,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Toast timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    /// Time a toast stays visible. `0` keeps toasts until dismissed.
    #[serde(default = "default_notification_duration_ms")]
    pub default_duration_ms: u64,

    /// Length of the fade-out once a toast is dismissed.
    #[serde(default = "default_exit_animation_ms")]
    pub exit_animation_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_notification_duration_ms(),
            exit_animation_ms: default_exit_animation_ms(),
        }
    }
}

/// Search box behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    #[serde(default = "default_search_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_search_debounce_ms(),
        }
    }
}

/// Dialog behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModalConfig {
    #[serde(default = "default_modal_exit_delay_ms")]
    pub exit_delay_ms: u64,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            exit_delay_ms: default_modal_exit_delay_ms(),
        }
    }
}

/// Data source selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataConfig {
    #[serde(default)]
    pub source: DataSourceKind,

    /// Simulated latency of the mock source.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,

    /// Base URL of the HTTP source, e.g. `https://club.example/api`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: DataSourceKind::default(),
            mock_delay_ms: default_mock_delay_ms(),
            api_url: None,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub modal: ModalConfig,

    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    /// Default toast duration, clamped to the supported range.
    ///
    /// Zero is passed through unchanged (persistent toasts).
    #[must_use]
    pub fn notification_duration(&self) -> Duration {
        let ms = self.notifications.default_duration_ms;
        if ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(ms.clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS))
    }

    #[must_use]
    pub fn exit_animation(&self) -> Duration {
        Duration::from_millis(
            self.notifications
                .exit_animation_ms
                .clamp(MIN_EXIT_ANIMATION_MS, MAX_EXIT_ANIMATION_MS),
        )
    }

    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(
            self.search
                .debounce_ms
                .clamp(MIN_SEARCH_DEBOUNCE_MS, MAX_SEARCH_DEBOUNCE_MS),
        )
    }

    #[must_use]
    pub fn modal_exit_delay(&self) -> Duration {
        Duration::from_millis(
            self.modal
                .exit_delay_ms
                .clamp(MIN_MODAL_EXIT_DELAY_MS, MAX_MODAL_EXIT_DELAY_MS),
        )
    }

    #[must_use]
    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.data.mock_delay_ms.min(MAX_MOCK_DELAY_MS))
    }
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_notification_duration_ms() -> u64 {
    DEFAULT_NOTIFICATION_DURATION_MS
}

fn default_exit_animation_ms() -> u64 {
    DEFAULT_EXIT_ANIMATION_MS
}

fn default_search_debounce_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE_MS
}

fn default_modal_exit_delay_ms() -> u64 {
    DEFAULT_MODAL_EXIT_DELAY_MS
}

fn default_mock_delay_ms() -> u64 {
    DEFAULT_MOCK_DELAY_MS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>()
        .map_err(|_| D::Error::custom(format!("invalid theme_mode: {}", raw)))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings not loaded");
                    return (
                        Config::default(),
                        Some("Settings could not be read; defaults are in use".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                default_duration_ms: 3000,
                exit_animation_ms: 250,
            },
            search: SearchConfig { debounce_ms: 150 },
            modal: ModalConfig { exit_delay_ms: 100 },
            data: DataConfig {
                source: DataSourceKind::Http,
                mock_delay_ms: 0,
                api_url: Some("http://localhost:8080/api".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.notification_duration(), Duration::from_millis(5000));
        assert_eq!(config.exit_animation(), Duration::from_millis(400));
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.modal_exit_delay(), Duration::from_millis(200));
        assert_eq!(config.mock_delay(), Duration::from_millis(800));
        assert_eq!(config.data.source, DataSourceKind::Mock);
        assert!(config.data.api_url.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [general]
            theme_mode = "dark"

            [search]
            debounce_ms = 120
            "#,
        )
        .expect("partial config parses");

        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.search.debounce_ms, 120);
        assert_eq!(config.notifications, NotificationsConfig::default());
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive_and_validated() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("uppercase accepted");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);

        let err = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n")
            .expect_err("unknown theme rejected");
        assert!(err.to_string().contains("invalid theme_mode"));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.notifications.default_duration_ms = 10;
        config.notifications.exit_animation_ms = 60_000;
        config.search.debounce_ms = 99_999;
        config.data.mock_delay_ms = u64::MAX;

        assert_eq!(
            config.notification_duration(),
            Duration::from_millis(MIN_NOTIFICATION_DURATION_MS)
        );
        assert_eq!(config.exit_animation(), Duration::from_millis(MAX_EXIT_ANIMATION_MS));
        assert_eq!(config.search_debounce(), Duration::from_millis(MAX_SEARCH_DEBOUNCE_MS));
        assert_eq!(config.mock_delay(), Duration::from_millis(MAX_MOCK_DELAY_MS));
    }

    #[test]
    fn zero_duration_means_persistent_toasts() {
        let mut config = Config::default();
        config.notifications.default_duration_ms = 0;
        assert_eq!(config.notification_duration(), Duration::ZERO);
    }

    #[test]
    fn data_source_kind_uses_lowercase_names() {
        let config: Config = toml::from_str(
            "[data]\nsource = \"http\"\napi_url = \"https://club.example/api\"\n",
        )
        .expect("data section parses");
        assert_eq!(config.data.source, DataSourceKind::Http);
        assert_eq!(config.data.mock_delay_ms, DEFAULT_MOCK_DELAY_MS);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;

        save_with_override(&config, Some(base.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base));

        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\ntheme_mode=").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        save_to_path(&Config::default(), &path).expect("save");

        let content = fs::read_to_string(&path).expect("read back");
        for section in ["[general]", "[notifications]", "[search]", "[modal]", "[data]"] {
            assert!(content.contains(section), "missing {section}");
        }
        assert!(content.contains("theme_mode = \"system\""));
    }
}
