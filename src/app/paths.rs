// SPDX-License-Identifier: MPL-2.0
//! Where settings and state live on disk.
//!
//! Both directories resolve the same way, first match wins:
//! 1. an explicit path handed to a `*_with_override` function,
//! 2. `--data-dir` / `--config-dir` registered through [`init_cli_overrides`],
//! 3. `SQUAD_DESK_DATA_DIR` / `SQUAD_DESK_CONFIG_DIR` when non-empty,
//! 4. the platform directory from `dirs` with `SquadDesk` appended.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "SquadDesk";

pub const ENV_DATA_DIR: &str = "SQUAD_DESK_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "SQUAD_DESK_CONFIG_DIR";

/// Serializes tests that mutate the directory environment variables.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the command-line directory flags. Only the first call counts.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::debug!("CLI directory overrides already initialized");
    }
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or_else(|| cli.get().cloned().flatten())
        .or_else(|| {
            std::env::var(env_var)
                .ok()
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| platform().map(|base| base.join(APP_NAME)))
}

/// Directory for `state.cbor` and the log files.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Directory holding `settings.toml`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}
