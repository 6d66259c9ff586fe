// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages.
//!
//! The `App` struct owns the five pages and the shared [`AppContext`], and
//! translates shell messages (sidebar, shortcuts, ticks) into page updates
//! and persisted preferences. Policy decisions such as window size, which
//! preferences persist and where startup warnings go are kept here so they
//! are easy to audit.

pub mod config;
pub mod context;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use context::AppContext;
pub use message::{Flags, Message};
pub use screen::Screen;

use crate::ui::attendance;
use crate::ui::drills;
use crate::ui::medical;
use crate::ui::players;
use crate::ui::schedule;
use crate::ui::theming::ThemeMode;
use config::{Config, DataSourceKind};
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::AppState;
use std::cell::RefCell;
use std::fmt;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    /// Effective theme; may differ from the config when `--theme` is given.
    theme_mode: ThemeMode,
    app_state: AppState,
    ctx: AppContext,
    players: players::State,
    drills: drills::State,
    schedule: schedule::State,
    attendance: attendance::State,
    medical: medical::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("ctx", &self.ctx)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1180;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 asks for an `Fn` boot closure; the flags are consumed once
    // and later calls start from defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies CLI data-source overrides to the loaded config.
fn apply_flag_overrides(config: &mut Config, flags: &Flags) {
    if let Some(delay) = flags.mock_delay_ms {
        config.data.mock_delay_ms = delay;
    }
    if let Some(url) = &flags.api_url {
        config.data.source = DataSourceKind::Http;
        config.data.api_url = Some(url.clone());
    }
}

impl App {
    /// Loads config and state, builds the shared context and starts the
    /// first page's load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        apply_flag_overrides(&mut config, &flags);
        let (app_state, state_warning) = AppState::load_from(None);
        let (data, source_warning) = context::build_data_source(&config);

        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        let search_debounce = config.search_debounce();
        tracing::info!(
            source = data.name(),
            theme = %theme_mode,
            "starting"
        );

        let mut ctx = AppContext::new(config, data);
        for warning in [config_warning, state_warning, source_warning]
            .into_iter()
            .flatten()
        {
            ctx.notifications.warning(warning);
        }

        let mut app = App {
            screen: Screen::default(),
            theme_mode,
            players: players::State::new(app_state.last_team.clone(), search_debounce),
            drills: drills::State::new(search_debounce),
            schedule: schedule::State::new(search_debounce),
            attendance: attendance::State::new(search_debounce),
            medical: medical::State::new(search_debounce),
            app_state,
            ctx,
        };

        let task = update::enter_screen(&mut app.update_context());
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            app_state: &mut self.app_state,
            app: &mut self.ctx,
            players: &mut self.players,
            drills: &mut self.drills,
            schedule: &mut self.schedule,
            attendance: &mut self.attendance,
            medical: &mut self.medical,
        }
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Players => match self.players.team() {
                Some(team) => format!("{team} - SquadDesk"),
                None => "Players - SquadDesk".to_string(),
            },
            screen => format!("{screen} - SquadDesk"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn is_loading(&self) -> bool {
        self.players.is_loading()
            || self.drills.is_loading()
            || self.schedule.is_loading()
            || self.attendance.is_loading()
            || self.medical.is_loading()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.ctx.modals.has_active());
        let tick_sub = subscription::create_tick_subscription(
            self.ctx.notifications.has_notifications(),
            self.ctx.modals.is_animating(),
            self.is_loading(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Players(message) => update::handle_players_message(&mut ctx, message),
            Message::Drills(message) => update::handle_drills_message(&mut ctx, message),
            Message::Schedule(message) => update::handle_schedule_message(&mut ctx, message),
            Message::Attendance(message) => update::handle_attendance_message(&mut ctx, message),
            Message::Medical(message) => update::handle_medical_message(&mut ctx, message),
            Message::Sidebar(message) => update::handle_sidebar_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.app.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => {
                update::handle_tick(&mut ctx, now);
                Task::none()
            }
            Message::CloseActiveModal => update::handle_close_active_modal(&mut ctx),
            Message::FocusNext => update::handle_focus_next(&mut ctx),
            Message::FocusPrevious => update::handle_focus_previous(&mut ctx),
            Message::FocusSearch => update::handle_focus_search(&mut ctx),
            Message::ShowShortcuts => update::handle_show_shortcuts(&mut ctx),
            Message::NewDrillShortcut => update::handle_new_drill_shortcut(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            sidebar_collapsed: self.app_state.sidebar_collapsed,
            theme_mode: self.theme_mode,
            app: &self.ctx,
            players: &self.players,
            drills: &self.drills,
            schedule: &self.schedule,
            attendance: &self.attendance,
            medical: &self.medical,
        })
    }
}
