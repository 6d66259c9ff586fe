// SPDX-License-Identifier: MPL-2.0
//! Modal sessions and the stack that owns them.
//!
//! Opening a modal pushes a [`ModalSession`] that remembers which widget
//! had focus, engages the scroll lock and focuses the first focusable
//! member. Closing marks the session inactive right away (focus goes back,
//! the scroll lock is released once no modal is open) and drops it after
//! the exit delay so the dialog can fade out.
//!
//! Modals stack: the most recently opened open session is the active one.
//! It owns the focus trap and is the one Escape or a backdrop click closes.

use super::focus::{blur, FocusId, FocusRing};
use crate::app::config::DEFAULT_MODAL_EXIT_DELAY_MS;
use iced::Task;
use std::fmt;
use std::time::{Duration, Instant};

/// Dialogs the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    PlayerDetails,
    DrillDetails,
    NewDrill,
    SessionDetails,
    AttendanceDetails,
    MedicalHistory,
    UpdateStatus,
    CheckupDetails,
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModalId::PlayerDetails => "player-details-modal",
            ModalId::DrillDetails => "drill-details-modal",
            ModalId::NewDrill => "new-drill-modal",
            ModalId::SessionDetails => "session-details-modal",
            ModalId::AttendanceDetails => "attendance-details-modal",
            ModalId::MedicalHistory => "medical-history-modal",
            ModalId::UpdateStatus => "update-status-modal",
            ModalId::CheckupDetails => "checkup-details-modal",
        };
        f.write_str(name)
    }
}

/// One open (or closing) dialog.
#[derive(Debug, Clone)]
pub struct ModalSession {
    modal_id: ModalId,
    is_open: bool,
    previously_focused: Option<FocusId>,
    ring: FocusRing,
    closing_since: Option<Instant>,
}

impl ModalSession {
    #[must_use]
    pub fn modal_id(&self) -> ModalId {
        self.modal_id
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns `true` while the exit delay runs.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing_since.is_some()
    }

    /// Widget that had focus when this modal opened.
    #[must_use]
    pub fn previously_focused(&self) -> Option<FocusId> {
        self.previously_focused
    }

    #[must_use]
    pub fn focused(&self) -> Option<FocusId> {
        self.ring.current()
    }
}

/// Stack of modal sessions plus the application-wide focus record.
#[derive(Debug, Clone)]
pub struct ModalManager {
    stack: Vec<ModalSession>,
    exit_delay: Duration,
    /// Widget currently holding keyboard focus, as far as the app knows.
    focused: Option<FocusId>,
    last_tick: Instant,
}

impl Default for ModalManager {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_MODAL_EXIT_DELAY_MS))
    }
}

impl ModalManager {
    #[must_use]
    pub fn new(exit_delay: Duration) -> Self {
        Self {
            stack: Vec::new(),
            exit_delay,
            focused: None,
            last_tick: Instant::now(),
        }
    }

    #[must_use]
    pub fn exit_delay(&self) -> Duration {
        self.exit_delay
    }

    /// Opens `modal_id` with its focusable members in tab order.
    ///
    /// Returns the widget to focus, or `None` when the modal is already open
    /// or has nothing focusable.
    pub fn open(&mut self, modal_id: ModalId, focusables: Vec<FocusId>) -> Option<FocusId> {
        if self.is_open(modal_id) {
            return None;
        }

        let mut ring = FocusRing::new(focusables);
        let first = ring.first();
        self.stack.push(ModalSession {
            modal_id,
            is_open: true,
            previously_focused: self.focused,
            ring,
            closing_since: None,
        });
        self.focused = first;

        tracing::debug!(%modal_id, "modal opened");
        first
    }

    /// Closes `modal_id`. Missing or already closing modals are ignored.
    ///
    /// Returns `true` if a session started closing.
    pub fn close(&mut self, modal_id: ModalId, now: Instant) -> bool {
        let Some(index) = self
            .stack
            .iter()
            .rposition(|s| s.is_open && s.modal_id == modal_id)
        else {
            return false;
        };
        self.begin_close(index, now);
        true
    }

    /// Closes whichever modal is active (Escape, backdrop click).
    pub fn close_active(&mut self, now: Instant) -> Option<ModalId> {
        let index = self.stack.iter().rposition(|s| s.is_open)?;
        let modal_id = self.stack[index].modal_id;
        self.begin_close(index, now);
        Some(modal_id)
    }

    fn begin_close(&mut self, index: usize, now: Instant) {
        let is_top = self.stack[index + 1..].iter().all(|s| !s.is_open);
        let session = &mut self.stack[index];
        session.is_open = false;
        session.closing_since = Some(now);
        let origin = session.previously_focused;
        let modal_id = session.modal_id;

        if is_top {
            self.focused = origin;
        } else if let Some(above) = self.stack[index + 1..].iter_mut().find(|s| s.is_open) {
            // The modal above now returns focus to where this one started.
            above.previously_focused = origin;
        }
        tracing::debug!(%modal_id, "modal closing");
    }

    /// Drops sessions whose exit delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        self.last_tick = now;
        let delay = self.exit_delay;
        self.stack.retain(|s| {
            s.closing_since
                .is_none_or(|since| now.saturating_duration_since(since) < delay)
        });
    }

    /// The topmost open session.
    #[must_use]
    pub fn active(&self) -> Option<&ModalSession> {
        self.stack.iter().rev().find(|s| s.is_open)
    }

    #[must_use]
    pub fn is_open(&self, modal_id: ModalId) -> bool {
        self.stack.iter().any(|s| s.is_open && s.modal_id == modal_id)
    }

    /// Returns `true` if any modal is open.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.active().is_some()
    }

    /// Background scrolling is locked while any modal is open.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.has_active()
    }

    /// Returns `true` while something still has to be drawn or timed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.stack.iter().any(ModalSession::is_closing)
    }

    /// Render opacity of a session as of the last tick.
    #[must_use]
    pub fn opacity(&self, session: &ModalSession) -> f32 {
        match session.closing_since {
            None => 1.0,
            Some(_) if self.exit_delay.is_zero() => 0.0,
            Some(since) => {
                let elapsed = self.last_tick.saturating_duration_since(since);
                (1.0 - elapsed.as_secs_f32() / self.exit_delay.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Sessions in stacking order, closing ones included.
    pub fn sessions(&self) -> impl Iterator<Item = &ModalSession> {
        self.stack.iter()
    }

    #[must_use]
    pub fn focused(&self) -> Option<FocusId> {
        self.focused
    }

    /// Records focus moved by other means than the trap.
    ///
    /// While a modal is active, widgets outside it are ignored.
    pub fn note_focus(&mut self, id: FocusId) {
        match self.stack.iter_mut().rev().find(|s| s.is_open) {
            Some(session) => {
                if session.ring.set_current(id) {
                    self.focused = Some(id);
                }
            }
            None => self.focused = Some(id),
        }
    }

    /// Tab inside the active modal.
    pub fn focus_next(&mut self) -> Option<FocusId> {
        let next = self.stack.iter_mut().rev().find(|s| s.is_open)?.ring.next();
        self.focused = next.or(self.focused);
        next
    }

    /// Shift+Tab inside the active modal.
    pub fn focus_previous(&mut self) -> Option<FocusId> {
        let previous = self.stack.iter_mut().rev().find(|s| s.is_open)?.ring.previous();
        self.focused = previous.or(self.focused);
        previous
    }

    /// Task that applies the current focus record to the widget tree.
    ///
    /// With no record, focus is cleared so keystrokes cannot reach a widget
    /// hidden behind a dialog.
    #[must_use]
    pub fn focus_task<M: Send + 'static>(&self) -> Task<M> {
        self.focused.map_or_else(blur, FocusId::focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH: FocusId = FocusId::new("players-search");
    const TITLE: FocusId = FocusId::new("drill-title");
    const MINUTES: FocusId = FocusId::new("drill-minutes");
    const NOTE: FocusId = FocusId::new("player-note");

    fn manager() -> ModalManager {
        ModalManager::new(Duration::from_millis(200))
    }

    #[test]
    fn open_focuses_first_member_and_locks_scroll() {
        let mut modals = manager();
        modals.note_focus(SEARCH);

        assert_eq!(modals.open(ModalId::NewDrill, vec![TITLE, MINUTES]), Some(TITLE));
        assert!(modals.is_scroll_locked());
        assert_eq!(modals.focused(), Some(TITLE));
        assert_eq!(
            modals.active().and_then(ModalSession::previously_focused),
            Some(SEARCH)
        );
    }

    #[test]
    fn reopening_an_open_modal_is_a_no_op() {
        let mut modals = manager();
        modals.open(ModalId::NewDrill, vec![TITLE]);
        assert_eq!(modals.open(ModalId::NewDrill, vec![TITLE]), None);
        assert_eq!(modals.sessions().count(), 1);
    }

    #[test]
    fn close_restores_focus_and_releases_lock() {
        let mut modals = manager();
        let t0 = Instant::now();
        modals.note_focus(SEARCH);
        modals.open(ModalId::NewDrill, vec![TITLE, MINUTES]);

        assert!(modals.close(ModalId::NewDrill, t0));
        assert!(!modals.is_scroll_locked());
        assert_eq!(modals.focused(), Some(SEARCH));

        // Still rendered during the exit delay.
        modals.tick(t0 + Duration::from_millis(199));
        assert_eq!(modals.sessions().count(), 1);
        modals.tick(t0 + Duration::from_millis(200));
        assert_eq!(modals.sessions().count(), 0);
    }

    #[test]
    fn closing_a_missing_modal_is_silent() {
        let mut modals = manager();
        assert!(!modals.close(ModalId::DrillDetails, Instant::now()));
        assert_eq!(modals.close_active(Instant::now()), None);
    }

    #[test]
    fn double_close_is_a_no_op() {
        let mut modals = manager();
        let t0 = Instant::now();
        modals.open(ModalId::PlayerDetails, vec![]);
        assert!(modals.close(ModalId::PlayerDetails, t0));
        assert!(!modals.close(ModalId::PlayerDetails, t0));
    }

    #[test]
    fn tab_stays_inside_active_modal() {
        let mut modals = manager();
        modals.open(ModalId::NewDrill, vec![TITLE, MINUTES]);
        assert_eq!(modals.focus_next(), Some(MINUTES));
        assert_eq!(modals.focus_next(), Some(TITLE));
        assert_eq!(modals.focus_previous(), Some(MINUTES));

        modals.note_focus(SEARCH);
        assert_eq!(modals.focused(), Some(MINUTES));
    }

    #[test]
    fn closing_session_fades_out() {
        let mut modals = manager();
        let t0 = Instant::now();
        modals.open(ModalId::DrillDetails, vec![]);
        let open = modals.sessions().next().cloned().expect("session");
        assert!((modals.opacity(&open) - 1.0).abs() < f32::EPSILON);

        modals.close(ModalId::DrillDetails, t0);
        modals.tick(t0 + Duration::from_millis(100));
        let closing = modals.sessions().next().cloned().expect("still fading");
        assert!((modals.opacity(&closing) - 0.5).abs() < 0.01);
    }

    #[test]
    fn stacked_modals_close_top_first() {
        let mut modals = manager();
        let t0 = Instant::now();
        modals.note_focus(SEARCH);
        modals.open(ModalId::PlayerDetails, vec![NOTE]);
        modals.open(ModalId::NewDrill, vec![TITLE]);

        assert_eq!(modals.close_active(t0), Some(ModalId::NewDrill));
        assert_eq!(modals.focused(), Some(NOTE));
        assert!(modals.is_scroll_locked());

        assert_eq!(modals.close_active(t0), Some(ModalId::PlayerDetails));
        assert_eq!(modals.focused(), Some(SEARCH));
        assert!(!modals.is_scroll_locked());
    }

    #[test]
    fn closing_lower_modal_hands_focus_origin_to_the_one_above() {
        let mut modals = manager();
        let t0 = Instant::now();
        modals.note_focus(SEARCH);
        modals.open(ModalId::PlayerDetails, vec![NOTE]);
        modals.open(ModalId::NewDrill, vec![TITLE]);

        assert!(modals.close(ModalId::PlayerDetails, t0));
        assert_eq!(modals.focused(), Some(TITLE));
        modals.close_active(t0);
        assert_eq!(modals.focused(), Some(SEARCH));
    }
}
