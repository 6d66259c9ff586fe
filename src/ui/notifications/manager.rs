// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the single toast container of the application. It
//! stamps every notification with its own deadline and advances phases on
//! each tick:
//!
//! - `Pending` becomes `Visible` on the first tick after `show`
//! - `Visible` becomes `Dismissing` once its deadline passes or on dismiss
//! - `Dismissing` is dropped after the exit window elapses
//!
//! Any number of toasts may be live at once; none affects another's timer.

use super::notification::{Notification, NotificationHandle, NotificationId, Phase, Severity};
use crate::app::config::{DEFAULT_EXIT_ANIMATION_MS, DEFAULT_NOTIFICATION_DURATION_MS};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (toast clicked).
    Dismiss(NotificationId),
    /// Periodic tick advancing phases and timers.
    Tick(Instant),
}

/// Owns every live notification, oldest first.
#[derive(Debug)]
pub struct Manager {
    items: Vec<Notification>,
    default_duration: Duration,
    exit_duration: Duration,
    /// Instant of the last tick, used to evaluate exit fades in `view`.
    last_tick: Instant,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager with default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timing(
            Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS),
            Duration::from_millis(DEFAULT_EXIT_ANIMATION_MS),
        )
    }

    /// Creates an empty manager with explicit default and exit durations.
    #[must_use]
    pub fn with_timing(default_duration: Duration, exit_duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            default_duration,
            exit_duration,
            last_tick: Instant::now(),
        }
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Shows a notification now.
    ///
    /// `duration` of `None` uses the configured default; `Some(ZERO)` keeps
    /// the toast until it is dismissed.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> NotificationHandle {
        self.show_at(message, severity, duration, Instant::now())
    }

    /// Same as [`show`](Self::show) with an explicit creation instant.
    pub fn show_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
        now: Instant,
    ) -> NotificationHandle {
        let duration = duration.unwrap_or(self.default_duration);
        self.push(Notification::new(severity, message, duration, now))
    }

    /// Shows a notification whose severity is given by name.
    ///
    /// Unknown or missing names fall back to info.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Option<&str>,
        duration: Option<Duration>,
    ) -> NotificationHandle {
        let severity = severity.map(Severity::parse).unwrap_or_default();
        self.show(message, severity, duration)
    }

    /// Shorthand for an info toast with the default duration.
    pub fn info(&mut self, message: impl Into<String>) -> NotificationHandle {
        self.show(message, Severity::Info, None)
    }

    /// Shorthand for a success toast with the default duration.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationHandle {
        self.show(message, Severity::Success, None)
    }

    /// Shorthand for a warning toast with the default duration.
    pub fn warning(&mut self, message: impl Into<String>) -> NotificationHandle {
        self.show(message, Severity::Warning, None)
    }

    /// Shorthand for an error toast with the default duration.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationHandle {
        self.show(message, Severity::Error, None)
    }

    /// Inserts a prepared notification in the `Pending` phase.
    ///
    /// Warnings and errors are also written to the log.
    pub fn push(&mut self, notification: Notification) -> NotificationHandle {
        match notification.severity() {
            Severity::Warning => tracing::warn!(message = notification.message(), "notification"),
            Severity::Error => tracing::error!(message = notification.message(), "notification"),
            Severity::Success | Severity::Info => {
                tracing::debug!(message = notification.message(), "notification");
            }
        }

        let id = notification.id();
        self.items.push(notification);
        id
    }

    /// Starts the exit animation of a notification.
    ///
    /// Returns `false` if the notification is unknown or already leaving.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    /// Same as [`dismiss`](Self::dismiss) with an explicit instant.
    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        self.items
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.phase() < Phase::Dismissing && n.advance(Phase::Dismissing, now))
    }

    /// Advances every notification by at most one phase.
    pub fn tick(&mut self, now: Instant) {
        self.last_tick = now;
        let exit = self.exit_duration;

        for notification in &mut self.items {
            match notification.phase() {
                Phase::Pending => {
                    notification.advance(Phase::Visible, now);
                }
                Phase::Visible if notification.is_expired(now) => {
                    notification.advance(Phase::Dismissing, now);
                }
                Phase::Dismissing
                    if now.saturating_duration_since(notification.phase_changed_at()) >= exit =>
                {
                    notification.advance(Phase::Removed, now);
                }
                _ => {}
            }
        }

        self.items.retain(|n| n.phase() != Phase::Removed);
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Looks up a live notification.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id() == id)
    }

    /// Returns the live notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Returns the number of live notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.items.len()
    }

    /// Returns whether there are any live notifications.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.items.is_empty()
    }

    /// Opacity of a notification as of the last tick.
    #[must_use]
    pub fn opacity(&self, notification: &Notification) -> f32 {
        notification.opacity(self.last_tick, self.exit_duration)
    }

    /// Drops every notification without animation.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXIT: Duration = Duration::from_millis(400);

    fn manager() -> Manager {
        Manager::with_timing(Duration::from_millis(5000), EXIT)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
        assert_eq!(manager.default_duration(), ms(5000));
    }

    #[test]
    fn show_inserts_pending_until_next_tick() {
        let mut manager = manager();
        let t0 = Instant::now();
        let id = manager.show_at("Saved", Severity::Success, None, t0);

        assert_eq!(manager.get(id).map(Notification::phase), Some(Phase::Pending));
        manager.tick(t0);
        assert_eq!(manager.get(id).map(Notification::phase), Some(Phase::Visible));
    }

    #[test]
    fn lifecycle_ends_within_duration_plus_exit_window() {
        let mut manager = manager();
        let t0 = Instant::now();
        let id = manager.show_at("Saved", Severity::Info, Some(ms(1000)), t0);

        manager.tick(t0 + ms(16));
        manager.tick(t0 + ms(999));
        assert_eq!(manager.get(id).map(Notification::phase), Some(Phase::Visible));

        manager.tick(t0 + ms(1000));
        assert_eq!(manager.get(id).map(Notification::phase), Some(Phase::Dismissing));

        manager.tick(t0 + ms(1399));
        assert!(manager.get(id).is_some());
        manager.tick(t0 + ms(1400));
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn timers_are_independent() {
        let mut manager = manager();
        let t0 = Instant::now();
        let short = manager.show_at("short", Severity::Info, Some(ms(1000)), t0);
        let long = manager.show_at("long", Severity::Info, Some(ms(3000)), t0);
        let sticky = manager.show_at("sticky", Severity::Error, Some(Duration::ZERO), t0);
        manager.tick(t0);

        assert!(manager.dismiss_at(long, t0 + ms(10)));
        manager.tick(t0 + ms(500));
        assert!(manager.get(long).is_none());
        assert_eq!(manager.get(short).map(Notification::phase), Some(Phase::Visible));

        manager.tick(t0 + ms(1000));
        manager.tick(t0 + ms(1500));
        assert!(manager.get(short).is_none());

        manager.tick(t0 + ms(60_000));
        assert_eq!(manager.get(sticky).map(Notification::phase), Some(Phase::Visible));
    }

    #[test]
    fn double_dismiss_is_a_no_op() {
        let mut manager = manager();
        let t0 = Instant::now();
        let id = manager.show_at("Saved", Severity::Info, None, t0);
        manager.tick(t0);

        assert!(manager.dismiss_at(id, t0 + ms(100)));
        assert!(!manager.dismiss_at(id, t0 + ms(300)));

        // The second call must not restart the exit window.
        manager.tick(t0 + ms(500));
        assert!(manager.get(id).is_none());
        assert!(!manager.dismiss_at(id, t0 + ms(600)));
    }

    #[test]
    fn notify_falls_back_to_info() {
        let mut manager = manager();
        let id = manager.notify("Hello", Some("shout"), None);
        assert_eq!(manager.get(id).map(Notification::severity), Some(Severity::Info));
        let id = manager.notify("Hello", None, None);
        assert_eq!(manager.get(id).map(Notification::severity), Some(Severity::Info));
    }

    #[test]
    fn handle_message_dismiss_and_tick() {
        let mut manager = manager();
        let t0 = Instant::now();
        let id = manager.show_at("Saved", Severity::Info, None, t0);
        manager.handle_message(&Message::Tick(t0));
        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.get(id).map(Notification::phase), Some(Phase::Dismissing));
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = manager();
        for i in 0..5 {
            manager.info(format!("test-{i}"));
        }
        assert_eq!(manager.visible_count(), 5);
        manager.clear();
        assert!(!manager.has_notifications());
    }
}
