// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::attendance;
use crate::ui::drills;
use crate::ui::medical;
use crate::ui::notifications;
use crate::ui::players;
use crate::ui::schedule;
use crate::ui::sidebar;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// page and component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Players(players::Message),
    Drills(drills::Message),
    Schedule(schedule::Message),
    Attendance(attendance::Message),
    Medical(medical::Message),
    Sidebar(sidebar::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast expiry, modal exit animations and spinners.
    Tick(Instant),
    /// Escape or a backdrop press.
    CloseActiveModal,
    FocusNext,
    FocusPrevious,
    /// Ctrl/Cmd+K.
    FocusSearch,
    /// Ctrl/Cmd+/.
    ShowShortcuts,
    /// Ctrl/Cmd+N.
    NewDrillShortcut,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Theme for this session only; the config file is left untouched.
    pub theme: Option<ThemeMode>,
    /// Optional data directory override (for state and log files).
    /// Takes precedence over `SQUAD_DESK_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SQUAD_DESK_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Overrides `[data] mock_delay_ms`.
    pub mock_delay_ms: Option<u64>,
    /// Selects the HTTP source against this base URL.
    pub api_url: Option<String>,
}
