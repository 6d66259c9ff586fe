// SPDX-License-Identifier: MPL-2.0
//! Team domain types.

/// Implements `Display` and an `ALL` constant for a label enum.
macro_rules! labeled_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// All variants in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable label.
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Lowercase control token.
            #[must_use]
            pub fn token(self) -> String {
                self.label().to_lowercase()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

pub mod attendance;
pub mod calendar;
pub mod medical;
pub mod types;

pub use attendance::{
    AttendanceEntry, AttendanceOverview, AttendanceRecord, AttendanceSheet, AttendanceStatus,
    AttendanceSubmission,
};
pub use calendar::Week;
pub use medical::{
    Checkup, CheckupKind, CheckupStatus, MedicalEvent, MedicalRecord, MedicalStatus, StatusUpdate,
};
pub use types::{
    Difficulty, Drill, DrillKind, Player, PlayerStatus, Position, SessionStatus, Sport, Team,
    TrainingSession,
};
