// SPDX-License-Identifier: MPL-2.0
//! Focus identifiers and the wrap-around ring used to trap focus.

use iced::widget::{operation, Id};
use iced::Task;

/// Identifier of a focusable widget (text inputs carry it as their `Id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(&'static str);

impl FocusId {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Widget id to attach to the focusable widget.
    #[must_use]
    pub fn widget_id(self) -> Id {
        Id::new(self.0)
    }

    /// Task that moves keyboard focus to this widget.
    #[must_use]
    pub fn focus<M: Send + 'static>(self) -> Task<M> {
        operation::focus(self.widget_id())
    }
}

/// Task that clears keyboard focus.
///
/// The focus operation unfocuses every widget whose id differs from the
/// target, so targeting an id no widget carries leaves nothing focused.
#[must_use]
pub fn blur<M: Send + 'static>() -> Task<M> {
    operation::focus(Id::new("squad-desk-nowhere"))
}

/// Ordered set of focusable widgets inside one modal.
///
/// Moving past the last entry wraps to the first and vice versa, which is
/// what keeps Tab and Shift+Tab inside the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    members: Vec<FocusId>,
    current: Option<usize>,
}

impl FocusRing {
    #[must_use]
    pub fn new(members: Vec<FocusId>) -> Self {
        Self {
            members,
            current: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<FocusId> {
        self.current.and_then(|i| self.members.get(i).copied())
    }

    /// Focuses the first member.
    pub fn first(&mut self) -> Option<FocusId> {
        self.current = (!self.members.is_empty()).then_some(0);
        self.current()
    }

    /// Advances to the next member, wrapping after the last one.
    pub fn next(&mut self) -> Option<FocusId> {
        let len = self.members.len();
        if len == 0 {
            return None;
        }
        self.current = Some(self.current.map_or(0, |i| (i + 1) % len));
        self.current()
    }

    /// Moves to the previous member, wrapping before the first one.
    pub fn previous(&mut self) -> Option<FocusId> {
        let len = self.members.len();
        if len == 0 {
            return None;
        }
        self.current = Some(self.current.map_or(len - 1, |i| (i + len - 1) % len));
        self.current()
    }

    /// Records that `id` received focus by other means (click, typing).
    ///
    /// Returns `false` if `id` is not a member.
    pub fn set_current(&mut self, id: FocusId) -> bool {
        match self.members.iter().position(|member| *member == id) {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }
}
