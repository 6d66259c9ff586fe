// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::fmt;

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Players,
    Drills,
    Schedule,
    Attendance,
    Medical,
}

impl Screen {
    /// Sidebar order.
    pub const ALL: [Screen; 5] = [
        Screen::Players,
        Screen::Drills,
        Screen::Schedule,
        Screen::Attendance,
        Screen::Medical,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Players => "Players",
            Screen::Drills => "Drill Library",
            Screen::Schedule => "Schedule",
            Screen::Attendance => "Attendance",
            Screen::Medical => "Medical",
        }
    }

    /// Single-letter mark shown by the collapsed sidebar.
    #[must_use]
    pub fn mark(self) -> &'static str {
        match self {
            Screen::Players => "P",
            Screen::Drills => "D",
            Screen::Schedule => "S",
            Screen::Attendance => "A",
            Screen::Medical => "M",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
