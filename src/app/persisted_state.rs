// SPDX-License-Identifier: MPL-2.0
//! Layout state kept between sessions in `state.cbor`.
//!
//! Unlike `settings.toml` this file is not meant to be edited by hand: it
//! records whether the sidebar is collapsed and the last team viewed.

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Whether the sidebar is shown in its narrow, icon-only form.
    #[serde(default)]
    pub sidebar_collapsed: bool,

    /// Identifier of the team last shown on the players page.
    #[serde(default)]
    pub last_team: Option<String>,
}

impl AppState {
    /// Reads the state from `base_dir`, or the resolved data directory.
    ///
    /// A missing file gives the default silently. A corrupt one gives the
    /// default plus a warning for the toast layer.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::read(&path) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "application state not loaded");
                (
                    Self::default(),
                    Some("Saved layout could not be restored".to_string()),
                )
            }
        }
    }

    /// Writes the state, creating directories as needed. Returns a warning
    /// on failure.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("No data directory available to save the layout".to_string());
        };

        match self.write(&path) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "application state not saved");
                Some("Layout could not be saved".to_string())
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let reader = BufReader::new(fs::File::open(path)?);
        ciborium::from_reader(reader).map_err(|err| Error::State(err.to_string()))
    }

    fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(self, writer).map_err(|err| Error::State(err.to_string()))
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_is_expanded_without_team() {
        let state = AppState::default();
        assert!(!state.sidebar_collapsed);
        assert!(state.last_team.is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            sidebar_collapsed: true,
            last_team: Some("u19".to_string()),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none(), "save should succeed");
        assert!(base_dir.join(STATE_FILE).exists(), "state file should exist");

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        #[derive(Serialize)]
        struct Future {
            sidebar_collapsed: bool,
            accent: &'static str,
        }

        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join(STATE_FILE);
        let file = fs::File::create(&path).expect("create file");
        ciborium::into_writer(
            &Future {
                sidebar_collapsed: true,
                accent: "teal",
            },
            BufWriter::new(file),
        )
        .expect("write cbor");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert!(state.sidebar_collapsed);
        assert!(state.last_team.is_none());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            sidebar_collapsed: true,
            last_team: None,
        };

        assert!(state.save_to(Some(nested_dir.clone())).is_none(), "save should succeed");
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
