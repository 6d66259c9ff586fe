// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! `App::update` builds an [`UpdateContext`] over its fields and dispatches
//! each message to one of the handlers below.

use super::context::AppContext;
use super::persisted_state::AppState;
use super::{config, Message, Screen};
use crate::ui::attendance;
use crate::ui::drills;
use crate::ui::medical;
use crate::ui::modal::FocusId;
use crate::ui::players;
use crate::ui::schedule;
use crate::ui::sidebar::{self, Event as SidebarEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Instant;

pub const SHORTCUTS_HELP: &str =
    "Keyboard shortcuts: Ctrl+K (Search), Ctrl+N (New drill), Escape (Close)";

/// Mutable view over the application state, lent to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub app_state: &'a mut AppState,
    pub app: &'a mut AppContext,
    pub players: &'a mut players::State,
    pub drills: &'a mut drills::State,
    pub schedule: &'a mut schedule::State,
    pub attendance: &'a mut attendance::State,
    pub medical: &'a mut medical::State,
}

pub fn handle_players_message(ctx: &mut UpdateContext<'_>, message: players::Message) -> Task<Message> {
    let (event, task) = ctx.players.update(message, ctx.app);
    if let players::Event::TeamChanged(team_id) = event {
        ctx.app_state.last_team = Some(team_id);
        persist_app_state(ctx);
    }
    task.map(Message::Players)
}

pub fn handle_drills_message(ctx: &mut UpdateContext<'_>, message: drills::Message) -> Task<Message> {
    ctx.drills.update(message, ctx.app).map(Message::Drills)
}

pub fn handle_schedule_message(
    ctx: &mut UpdateContext<'_>,
    message: schedule::Message,
) -> Task<Message> {
    ctx.schedule.update(message, ctx.app).map(Message::Schedule)
}

pub fn handle_attendance_message(
    ctx: &mut UpdateContext<'_>,
    message: attendance::Message,
) -> Task<Message> {
    ctx.attendance.update(message, ctx.app).map(Message::Attendance)
}

pub fn handle_medical_message(
    ctx: &mut UpdateContext<'_>,
    message: medical::Message,
) -> Task<Message> {
    ctx.medical.update(message, ctx.app).map(Message::Medical)
}

pub fn handle_sidebar_message(ctx: &mut UpdateContext<'_>, message: sidebar::Message) -> Task<Message> {
    match sidebar::update(message, &mut ctx.app_state.sidebar_collapsed) {
        SidebarEvent::Navigate(target) => handle_screen_switch(ctx, target),
        SidebarEvent::CollapseChanged(collapsed) => {
            tracing::debug!(collapsed, "sidebar toggled");
            persist_app_state(ctx);
            Task::none()
        }
        SidebarEvent::ThemeToggled => {
            handle_theme_toggle(ctx);
            Task::none()
        }
    }
}

/// Switches page and starts its first load.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    tracing::debug!(from = %ctx.screen, to = %target, "switching screen");
    *ctx.screen = target;
    enter_screen(ctx)
}

/// Runs the current page's `enter` hook.
pub fn enter_screen(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.screen {
        Screen::Players => ctx.players.enter(ctx.app).map(Message::Players),
        Screen::Drills => ctx.drills.enter(ctx.app).map(Message::Drills),
        Screen::Schedule => ctx.schedule.enter(ctx.app).map(Message::Schedule),
        Screen::Attendance => ctx.attendance.enter(ctx.app).map(Message::Attendance),
        Screen::Medical => ctx.medical.enter(ctx.app).map(Message::Medical),
    }
}

/// Flips light and dark and writes the choice to `settings.toml`.
pub fn handle_theme_toggle(ctx: &mut UpdateContext<'_>) {
    let next = ctx.theme_mode.toggled();
    *ctx.theme_mode = next;
    ctx.app.config.general.theme_mode = next;
    tracing::info!(theme = %next, "theme changed");
    if let Err(error) = config::save(&ctx.app.config) {
        tracing::warn!(%error, "settings not saved");
        ctx.app
            .notifications
            .warning("Your theme choice could not be saved");
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    ctx.app.notifications.tick(now);
    ctx.app.modals.tick(now);
    ctx.players.tick(now);
    ctx.drills.tick(now);
    ctx.schedule.tick(now);
    ctx.attendance.tick(now);
    ctx.medical.tick(now);
}

/// Escape or backdrop press: closes the top modal and restores focus.
pub fn handle_close_active_modal(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.app.modals.close_active(Instant::now()) {
        Some(modal) => {
            tracing::debug!(%modal, "modal dismissed");
            ctx.app.modals.focus_task()
        }
        None => Task::none(),
    }
}

pub fn handle_focus_next(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.app.modals.focus_next().map_or_else(Task::none, FocusId::focus)
}

pub fn handle_focus_previous(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.app
        .modals
        .focus_previous()
        .map_or_else(Task::none, FocusId::focus)
}

/// Ctrl/Cmd+K: focuses the search box of the current page.
pub fn handle_focus_search(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.app.modals.has_active() {
        return Task::none();
    }
    let search = search_input(*ctx.screen);
    ctx.app.modals.note_focus(search);
    search.focus()
}

pub fn handle_show_shortcuts(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.app.notifications.info(SHORTCUTS_HELP);
    Task::none()
}

/// Ctrl/Cmd+N: opens the drill form when the drill library is showing.
pub fn handle_new_drill_shortcut(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen != Screen::Drills || ctx.app.modals.has_active() {
        return Task::none();
    }
    ctx.drills.open_new_drill(ctx.app).map(Message::Drills)
}

/// Search box of `screen`.
#[must_use]
pub fn search_input(screen: Screen) -> FocusId {
    match screen {
        Screen::Players => players::SEARCH,
        Screen::Drills => drills::SEARCH,
        Screen::Schedule => schedule::SEARCH,
        Screen::Attendance => attendance::SEARCH,
        Screen::Medical => medical::SEARCH,
    }
}

fn persist_app_state(ctx: &mut UpdateContext<'_>) {
    if let Some(warning) = ctx.app_state.save_to(None) {
        ctx.app.notifications.warning(warning);
    }
}
