// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: sidebar plus the current page, every open or
//! closing modal, then the toast overlay.

use super::context::AppContext;
use super::{Message, Screen};
use crate::ui::attendance;
use crate::ui::drills;
use crate::ui::medical;
use crate::ui::modal::{self, ModalId, ModalSession};
use crate::ui::notifications::Toast;
use crate::ui::players;
use crate::ui::schedule;
use crate::ui::sidebar::{self, ViewContext as SidebarViewContext};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::scroll_lock;
use iced::widget::{Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub sidebar_collapsed: bool,
    pub theme_mode: ThemeMode,
    pub app: &'a AppContext,
    pub players: &'a players::State,
    pub drills: &'a drills::State,
    pub schedule: &'a schedule::State,
    pub attendance: &'a attendance::State,
    pub medical: &'a medical::State,
}

/// Renders the application.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page: Element<'_, Message> = match ctx.screen {
        Screen::Players => ctx.players.view().map(Message::Players),
        Screen::Drills => ctx.drills.view().map(Message::Drills),
        Screen::Schedule => ctx.schedule.view().map(Message::Schedule),
        Screen::Attendance => ctx.attendance.view().map(Message::Attendance),
        Screen::Medical => ctx.medical.view().map(Message::Medical),
    };

    let navigation = sidebar::view(SidebarViewContext {
        screen: ctx.screen,
        collapsed: ctx.sidebar_collapsed,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Sidebar);

    let shell: Element<'_, Message> = Row::new()
        .push(navigation)
        .push(
            Container::new(scroll_lock(page, ctx.app.modals.is_scroll_locked()))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let with_modals = ctx.app.modals.sessions().fold(shell, |base, session| {
        let alpha = ctx.app.modals.opacity(session);
        match modal_content(&ctx, session.modal_id(), alpha) {
            Some(dialog) => modal::view::overlay(base, dialog, backdrop_message(session), alpha),
            None => base,
        }
    });

    Stack::new()
        .push(with_modals)
        .push(Toast::view_overlay(&ctx.app.notifications).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// A closing dialog keeps fading over the page but no longer reacts to
/// backdrop clicks, which would otherwise close the modal beneath it.
fn backdrop_message(session: &ModalSession) -> Option<Message> {
    session.is_open().then_some(Message::CloseActiveModal)
}

/// Dialog body from the page that owns `modal`.
fn modal_content<'a>(
    ctx: &ViewContext<'a>,
    modal: ModalId,
    alpha: f32,
) -> Option<Element<'a, Message>> {
    match modal {
        ModalId::PlayerDetails => ctx
            .players
            .modal_view(modal, alpha)
            .map(|content| content.map(Message::Players)),
        ModalId::DrillDetails | ModalId::NewDrill => ctx
            .drills
            .modal_view(modal, alpha)
            .map(|content| content.map(Message::Drills)),
        ModalId::SessionDetails => ctx
            .schedule
            .modal_view(modal, alpha)
            .map(|content| content.map(Message::Schedule)),
        ModalId::AttendanceDetails => ctx
            .attendance
            .modal_view(modal, alpha)
            .map(|content| content.map(Message::Attendance)),
        ModalId::MedicalHistory | ModalId::UpdateStatus | ModalId::CheckupDetails => ctx
            .medical
            .modal_view(modal, alpha)
            .map(|content| content.map(Message::Medical)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::ModalManager;
    use std::time::{Duration, Instant};

    #[test]
    fn only_open_sessions_close_on_backdrop_click() {
        let mut modals = ModalManager::new(Duration::from_millis(200));
        modals.open(ModalId::PlayerDetails, Vec::new());
        let open = modals.sessions().next().cloned().expect("session");
        assert!(matches!(
            backdrop_message(&open),
            Some(Message::CloseActiveModal)
        ));

        modals.close(ModalId::PlayerDetails, Instant::now());
        let closing = modals.sessions().next().cloned().expect("still fading");
        assert!(backdrop_message(&closing).is_none());
    }

    #[test]
    fn closing_top_dialog_does_not_forward_clicks_to_the_one_below() {
        let mut modals = ModalManager::new(Duration::from_millis(200));
        modals.open(ModalId::MedicalHistory, Vec::new());
        modals.open(ModalId::UpdateStatus, Vec::new());
        modals.close(ModalId::UpdateStatus, Instant::now());

        let wired: Vec<_> = modals
            .sessions()
            .map(|session| (session.modal_id(), backdrop_message(session).is_some()))
            .collect();
        assert_eq!(
            wired,
            vec![
                (ModalId::MedicalHistory, true),
                (ModalId::UpdateStatus, false)
            ]
        );
    }
}
