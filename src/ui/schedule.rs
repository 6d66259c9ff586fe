// SPDX-License-Identifier: MPL-2.0
//! Schedule page: training sessions filtered by sport and status.
//!
//! Sessions show as a flat list or as one Monday-to-Sunday week at a time.
//! The week view follows the same filters as the list.

use crate::app::context::AppContext;
use crate::application::port::DataResult;
use crate::domain::filter::{FilterCriterion, ListFilterEngine};
use crate::domain::team::{SessionStatus, Sport, TrainingSession, Week};
use crate::ui::components::filter_bar::{self, Choice};
use crate::ui::components::page;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::modal::{self, FocusId, ModalId};
use crate::ui::state::{Debouncer, LoadState};
use crate::ui::styles;
use crate::ui::theme;
use chrono::NaiveDate;
use iced::widget::{button, scrollable, Column, Row, Space, Text};
use iced::{alignment, Element, Length, Task};
use std::time::{Duration, Instant};

/// Search box of this page.
pub const SEARCH: FocusId = FocusId::new("schedule-search");

const DAY_FORMAT: &str = "%a %d %b";
const TIME_FORMAT: &str = "%H:%M";
const WEEKDAY_FORMAT: &str = "%A %-d %b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Week,
}

impl ViewMode {
    const ALL: [ViewMode; 2] = [ViewMode::List, ViewMode::Week];

    fn label(self) -> &'static str {
        match self {
            ViewMode::List => "List",
            ViewMode::Week => "Week",
        }
    }
}

/// Week shown after the first load: the current week if it has sessions,
/// else the week of the next session, else the week of the latest one.
fn initial_week(today: NaiveDate, sessions: &[TrainingSession]) -> Week {
    let current = Week::containing(today);
    if sessions.iter().any(|s| current.contains(s.starts_at.date())) {
        return current;
    }
    let dates = sessions.iter().map(|s| s.starts_at.date());
    dates
        .clone()
        .filter(|date| *date >= today)
        .min()
        .or_else(|| dates.max())
        .map_or(current, Week::containing)
}

#[derive(Debug, Clone)]
pub enum Message {
    SessionsLoaded(DataResult<Vec<TrainingSession>>),
    SportSelected(Choice<Sport>),
    StatusSelected(Choice<SessionStatus>),
    SearchChanged(String),
    SearchElapsed(u64),
    ClearFilters,
    ShowDetails(u32),
    CloseDetails,
    Delete(u32),
    ViewModeSelected(ViewMode),
    PreviousWeek,
    NextWeek,
    Today,
    Retry,
    ToggleErrorDetails,
}

#[derive(Debug)]
pub struct State {
    sessions: Vec<TrainingSession>,
    engine: ListFilterEngine,
    sport: Choice<Sport>,
    status: Choice<SessionStatus>,
    search: String,
    debouncer: Debouncer,
    load: LoadState,
    selected: Option<u32>,
    view_mode: ViewMode,
    today: NaiveDate,
    week: Week,
}

impl State {
    #[must_use]
    pub fn new(search_debounce: Duration) -> Self {
        Self::on(chrono::Local::now().date_naive(), search_debounce)
    }

    /// A page whose "Today" is `today`.
    #[must_use]
    pub fn on(today: NaiveDate, search_debounce: Duration) -> Self {
        Self {
            sessions: Vec::new(),
            engine: ListFilterEngine::new(),
            sport: Choice::Any,
            status: Choice::Any,
            search: String::new(),
            debouncer: Debouncer::new(search_debounce),
            load: LoadState::new(),
            selected: None,
            view_mode: ViewMode::default(),
            today,
            week: Week::containing(today),
        }
    }

    /// Starts the first load when the page is shown.
    pub fn enter(&mut self, ctx: &mut AppContext) -> Task<Message> {
        if self.load.needs_load() {
            self.load_sessions(ctx)
        } else {
            Task::none()
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn tick(&mut self, now: Instant) {
        self.load.tick(now);
    }

    #[must_use]
    pub fn sessions(&self) -> &[TrainingSession] {
        &self.sessions
    }

    #[must_use]
    pub fn engine(&self) -> &ListFilterEngine {
        &self.engine
    }

    #[must_use]
    pub fn week(&self) -> Week {
        self.week
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Visible sessions on `day`, in start order.
    pub fn sessions_on(&self, day: NaiveDate) -> impl Iterator<Item = &TrainingSession> {
        self.engine
            .visible_items(&self.sessions)
            .map(|(_, session, _)| session)
            .filter(move |session| session.starts_at.date() == day)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&TrainingSession> {
        let id = self.selected?;
        self.sessions.iter().find(|session| session.id == id)
    }

    pub fn update(&mut self, message: Message, ctx: &mut AppContext) -> Task<Message> {
        match message {
            Message::SessionsLoaded(Ok(mut sessions)) => {
                sessions.sort_by_key(|session| session.starts_at);
                ctx.notifications
                    .success(format!("Loaded {} sessions", sessions.len()));
                self.week = initial_week(self.today, &sessions);
                self.sessions = sessions;
                self.engine.refresh(&self.sessions);
                self.load.succeed();
            }
            Message::SessionsLoaded(Err(error)) => {
                ctx.report_data_error("sessions", &error);
                self.load.fail(error);
            }
            Message::SportSelected(choice) => {
                self.sport = choice;
                self.apply_filters();
            }
            Message::StatusSelected(choice) => {
                self.status = choice;
                self.apply_filters();
            }
            Message::SearchChanged(value) => {
                self.search = value;
                ctx.modals.note_focus(SEARCH);
                return self.debouncer.schedule(Message::SearchElapsed);
            }
            Message::SearchElapsed(token) => {
                if self.debouncer.fire(token) {
                    self.engine.apply_search(&self.sessions, &self.search);
                }
            }
            Message::ClearFilters => {
                self.sport = Choice::Any;
                self.status = Choice::Any;
                self.search.clear();
                self.debouncer.cancel();
                self.engine.clear(&self.sessions);
            }
            Message::ShowDetails(id) => {
                self.selected = Some(id);
                ctx.modals.open(ModalId::SessionDetails, Vec::new());
                return ctx.modals.focus_task();
            }
            Message::CloseDetails => {
                ctx.modals.close(ModalId::SessionDetails, Instant::now());
                return ctx.modals.focus_task();
            }
            Message::Delete(id) => {
                let Some(index) = self.sessions.iter().position(|session| session.id == id) else {
                    return Task::none();
                };
                let removed = self.sessions.remove(index);
                self.engine.refresh(&self.sessions);
                ctx.notifications
                    .success(format!("Session \"{}\" deleted", removed.title));
                if self.selected == Some(id) {
                    ctx.modals.close(ModalId::SessionDetails, Instant::now());
                    return ctx.modals.focus_task();
                }
            }
            Message::ViewModeSelected(mode) => self.view_mode = mode,
            Message::PreviousWeek => self.week = self.week.previous(),
            Message::NextWeek => self.week = self.week.next(),
            Message::Today => self.week = Week::containing(self.today),
            Message::Retry => return self.load_sessions(ctx),
            Message::ToggleErrorDetails => self.load.toggle_details(),
        }
        Task::none()
    }

    fn load_sessions(&mut self, ctx: &AppContext) -> Task<Message> {
        if !self.load.begin(Instant::now()) {
            return Task::none();
        }
        Task::perform(ctx.data.sessions(), Message::SessionsLoaded)
    }

    fn apply_filters(&mut self) {
        let criteria = vec![
            FilterCriterion::equals("sport", self.sport.criterion_value()),
            FilterCriterion::equals("status", self.status.criterion_value()),
        ];
        self.engine.apply_filters(&self.sessions, criteria);
    }

    fn filters_active(&self) -> bool {
        self.sport != Choice::Any || self.status != Choice::Any || !self.search.is_empty()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let upcoming = self
            .sessions
            .iter()
            .filter(|session| session.status == SessionStatus::Scheduled)
            .count();
        let modes = ViewMode::ALL
            .iter()
            .map(|mode| {
                button(Text::new(mode.label()).size(typography::BODY))
                    .on_press(Message::ViewModeSelected(*mode))
                    .style(styles::button::chip(self.view_mode == *mode))
                    .into()
            })
            .collect();
        let header = page::header(
            "Schedule",
            Some(format!("{upcoming} upcoming sessions")),
            modes,
        );

        let body: Element<'_, Message> = if self.load.is_loading() {
            page::loading(self.load.elapsed(), "Loading sessions…")
        } else if let Some(error) = self.load.error() {
            page::load_error(
                "the schedule",
                error,
                self.load.details_visible(),
                Message::Retry,
                Message::ToggleErrorDetails,
            )
        } else {
            match self.view_mode {
                ViewMode::List => self.list_view(),
                ViewMode::Week => self.week_view(),
            }
        };

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(filter_bar::bar(vec![
                filter_bar::search_box(
                    SEARCH,
                    "Search sessions…",
                    &self.search,
                    Message::SearchChanged,
                ),
                filter_bar::picker(self.sport, Message::SportSelected),
                filter_bar::picker(self.status, Message::StatusSelected),
                filter_bar::clear_button(self.filters_active(), Message::ClearFilters),
            ]))
            .push(body)
            .into()
    }

    fn list_view(&self) -> Element<'_, Message> {
        let mut list = Column::new().spacing(spacing::XS).push(filter_bar::summary(
            self.engine.visible_count(),
            self.sessions.len(),
            "sessions",
        ));

        if self.engine.is_empty_result() && !self.sessions.is_empty() {
            list = list.push(page::empty("No sessions match the current filters."));
        }

        for (_, session, visibility) in self.engine.visible_items(&self.sessions) {
            list = list.push(page::card(session_row(session), visibility.highlighted));
        }

        scrollable(list).height(Length::Fill).into()
    }

    fn week_view(&self) -> Element<'_, Message> {
        let nav = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                button(Text::new("‹").size(typography::TITLE_SM))
                    .on_press(Message::PreviousWeek)
                    .style(styles::button::ghost),
            )
            .push(Text::new(self.week.header()).size(typography::TITLE_SM))
            .push(
                button(Text::new("›").size(typography::TITLE_SM))
                    .on_press(Message::NextWeek)
                    .style(styles::button::ghost),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new("Today").size(typography::BODY))
                    .on_press(Message::Today)
                    .style(styles::button::unselected),
            );

        let days = self.week.days().fold(Column::new().spacing(spacing::SM), |column, day| {
            let title = Text::new(day.format(WEEKDAY_FORMAT).to_string()).size(typography::BODY_LG);
            let mut block = Column::new().spacing(spacing::XS).push(title);
            let mut any = false;
            for session in self.sessions_on(day) {
                any = true;
                block = block.push(page::card(session_row(session), false));
            }
            if !any {
                block = block.push(page::muted("No sessions"));
            }
            column.push(block)
        });

        Column::new()
            .spacing(spacing::MD)
            .push(nav)
            .push(scrollable(days).height(Length::Fill))
            .into()
    }

    /// Dialog content for `modal`, if this page owns it.
    pub fn modal_view(&self, modal: ModalId, alpha: f32) -> Option<Element<'_, Message>> {
        if modal != ModalId::SessionDetails {
            return None;
        }
        let session = self.selected()?;

        let body = Column::new()
            .spacing(spacing::XS)
            .push(page::detail_row("Sport", session.sport.label()))
            .push(page::detail_row(
                "Date",
                session.starts_at.format(DAY_FORMAT).to_string(),
            ))
            .push(page::detail_row(
                "Time",
                session.starts_at.format(TIME_FORMAT).to_string(),
            ))
            .push(page::detail_row(
                "Duration",
                format!("{} min", session.minutes),
            ))
            .push(page::detail_row("Location", session.location.as_str()))
            .push(page::detail_row("Status", session.status.label()))
            .push(
                Row::new().push(Space::new().width(Length::Fill)).push(
                    button(Text::new("Delete session").size(typography::BODY))
                        .on_press(Message::Delete(session.id))
                        .style(styles::button::unselected),
                ),
            );

        Some(modal::view::dialog(
            session.title.as_str(),
            body,
            Message::CloseDetails,
            alpha,
        ))
    }
}

fn session_row(session: &TrainingSession) -> Element<'_, Message> {
    let when = Column::new()
        .width(Length::Fixed(110.0))
        .push(Text::new(session.starts_at.format(DAY_FORMAT).to_string()).size(typography::BODY))
        .push(page::muted(session.starts_at.format(TIME_FORMAT).to_string()));

    let what = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(session.title.as_str()).size(typography::BODY_LG))
        .push(page::muted(format!(
            "{} · {} min",
            session.location, session.minutes
        )));

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(when)
        .push(what)
        .push(Space::new().width(Length::Fill))
        .push(page::badge(session.sport.label(), palette::PRIMARY_500))
        .push(page::badge(
            session.status.label(),
            theme::session_status_color(session.status),
        ))
        .push(
            button(Text::new("Details").size(typography::BODY))
                .on_press(Message::ShowDetails(session.id))
                .style(styles::button::ghost),
        )
        .into()
}
