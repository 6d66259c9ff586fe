// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Severity` and the
//! `Phase` a toast moves through between creation and removal.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::convert::Infallible;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by `show`, used to dismiss a notification early.
pub type NotificationHandle = NotificationId;

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue). Fallback for unknown severity names.
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    /// Parses a severity name, falling back to [`Severity::Info`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Short glyph shown next to the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning => "!",
            Severity::Error => "✕",
        }
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Lifecycle phase of a notification.
///
/// Phases only move forward: `Pending → Visible → Dismissing → Removed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Inserted but still offstage; becomes visible on the next tick.
    Pending,
    /// Onstage.
    Visible,
    /// Playing the exit animation.
    Dismissing,
    /// Gone; no longer rendered.
    Removed,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
    /// Zero means "stay until dismissed".
    duration: Duration,
    phase: Phase,
    phase_changed_at: Instant,
}

impl Notification {
    /// Creates a pending notification stamped with `now`.
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        duration: Duration,
        now: Instant,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: now,
            duration,
            phase: Phase::Pending,
            phase_changed_at: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// When the current phase began.
    #[must_use]
    pub fn phase_changed_at(&self) -> Instant {
        self.phase_changed_at
    }

    /// Returns `true` if the notification never auto-dismisses.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    /// Instant at which auto-dismiss starts, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        (!self.is_persistent()).then(|| self.created_at + self.duration)
    }

    /// Returns whether the auto-dismiss deadline has passed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }

    /// Moves to `phase` if it lies ahead of the current one.
    ///
    /// Returns `false` (and changes nothing) for backward or repeated moves.
    pub(super) fn advance(&mut self, phase: Phase, now: Instant) -> bool {
        if phase <= self.phase {
            return false;
        }
        self.phase = phase;
        self.phase_changed_at = now;
        true
    }

    /// Render opacity at `now`, given the exit animation length.
    #[must_use]
    pub fn opacity(&self, now: Instant, exit: Duration) -> f32 {
        match self.phase {
            Phase::Pending | Phase::Removed => 0.0,
            Phase::Visible => 1.0,
            Phase::Dismissing => {
                if exit.is_zero() {
                    return 0.0;
                }
                let elapsed = now.saturating_duration_since(self.phase_changed_at);
                (1.0 - elapsed.as_secs_f32() / exit.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(now: Instant) -> Notification {
        Notification::new(Severity::Info, "Saved", Duration::from_secs(5), now)
    }

    #[test]
    fn notification_ids_are_unique() {
        let now = Instant::now();
        assert_ne!(at(now).id(), at(now).id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_severity_falls_back_to_info() {
        assert_eq!(Severity::parse("ERROR"), Severity::Error);
        assert_eq!(Severity::parse(" success "), Severity::Success);
        assert_eq!(Severity::parse("critical"), Severity::Info);
        assert_eq!("".parse::<Severity>(), Ok(Severity::Info));
    }

    #[test]
    fn zero_duration_is_persistent() {
        let now = Instant::now();
        let sticky = Notification::new(Severity::Error, "Sync failed", Duration::ZERO, now);
        assert!(sticky.is_persistent());
        assert!(sticky.deadline().is_none());
        assert!(!sticky.is_expired(now + Duration::from_secs(3600)));
    }

    #[test]
    fn phases_only_move_forward() {
        let now = Instant::now();
        let mut n = at(now);
        assert_eq!(n.phase(), Phase::Pending);
        assert!(n.advance(Phase::Dismissing, now));
        assert!(!n.advance(Phase::Visible, now));
        assert!(!n.advance(Phase::Dismissing, now));
        assert_eq!(n.phase(), Phase::Dismissing);
    }

    #[test]
    fn opacity_fades_during_exit() {
        let now = Instant::now();
        let exit = Duration::from_millis(400);
        let mut n = at(now);
        assert!((n.opacity(now, exit) - 0.0).abs() < f32::EPSILON);

        n.advance(Phase::Visible, now);
        assert!((n.opacity(now, exit) - 1.0).abs() < f32::EPSILON);

        n.advance(Phase::Dismissing, now);
        let halfway = n.opacity(now + Duration::from_millis(200), exit);
        assert!((halfway - 0.5).abs() < 0.01);
        assert!(n.opacity(now + exit, exit).abs() < f32::EPSILON);
    }
}
