// SPDX-License-Identifier: MPL-2.0
//! Attendance page: mark the squad for one session and review past sessions.
//!
//! The roster and the team's history load together on first entry. Marks
//! live in an [`AttendanceSheet`] until the coach saves; the overview cards
//! follow every mark. Saving sends the sheet through the data port and, on
//! success, prepends the session to the history list.

use crate::app::context::AppContext;
use crate::application::port::DataResult;
use crate::domain::filter::ListFilterEngine;
use crate::domain::team::{
    AttendanceRecord, AttendanceSheet, AttendanceStatus, AttendanceSubmission, Player, Team,
};
use crate::infrastructure::fixtures::DEFAULT_TEAM_ID;
use crate::ui::components::filter_bar;
use crate::ui::components::page;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::modal::{self, FocusId, ModalId};
use crate::ui::state::{Debouncer, LoadState};
use crate::ui::styles;
use crate::ui::theme;
use chrono::NaiveDate;
use iced::widget::{button, pick_list, scrollable, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Task};
use std::time::{Duration, Instant};

/// Search box of this page.
pub const SEARCH: FocusId = FocusId::new("attendance-search");

const DATE_FORMAT: &str = "%b %-d, %Y";
const DEFAULT_SESSION: &str = "Training session";

#[derive(Debug, Clone)]
pub enum Message {
    TeamsLoaded(DataResult<Vec<Team>>),
    RosterLoaded {
        team_id: String,
        result: DataResult<Vec<Player>>,
    },
    HistoryLoaded {
        team_id: String,
        result: DataResult<Vec<AttendanceRecord>>,
    },
    TeamSelected(Team),
    Mark(u32, AttendanceStatus),
    SessionNameChanged(String),
    SearchChanged(String),
    SearchElapsed(u64),
    NewSession,
    Save,
    Saved {
        record: AttendanceRecord,
        result: DataResult<()>,
    },
    ShowRecord(u32),
    CloseRecord,
    Retry,
    ToggleErrorDetails,
}

#[derive(Debug)]
pub struct State {
    teams: Vec<Team>,
    team: Option<Team>,
    players: Vec<Player>,
    sheet: AttendanceSheet,
    session_name: String,
    date: NaiveDate,
    history: Vec<AttendanceRecord>,
    engine: ListFilterEngine,
    search: String,
    debouncer: Debouncer,
    load: LoadState,
    saving: bool,
    selected_record: Option<u32>,
}

impl State {
    #[must_use]
    pub fn new(search_debounce: Duration) -> Self {
        Self::on(chrono::Local::now().date_naive(), search_debounce)
    }

    /// A page whose sessions are dated `date`.
    #[must_use]
    pub fn on(date: NaiveDate, search_debounce: Duration) -> Self {
        Self {
            teams: Vec::new(),
            team: None,
            players: Vec::new(),
            sheet: AttendanceSheet::default(),
            session_name: String::new(),
            date,
            history: Vec::new(),
            engine: ListFilterEngine::new(),
            search: String::new(),
            debouncer: Debouncer::new(search_debounce),
            load: LoadState::new(),
            saving: false,
            selected_record: None,
        }
    }

    /// Starts the first load when the page is shown.
    pub fn enter(&mut self, ctx: &mut AppContext) -> Task<Message> {
        if self.load.needs_load() {
            self.load_teams(ctx)
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
    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn sheet(&self) -> &AttendanceSheet {
        &self.sheet
    }

    #[must_use]
    pub fn history(&self) -> &[AttendanceRecord] {
        &self.history
    }

    #[must_use]
    pub fn engine(&self) -> &ListFilterEngine {
        &self.engine
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&AttendanceRecord> {
        let id = self.selected_record?;
        self.history.iter().find(|record| record.id == id)
    }

    pub fn update(&mut self, message: Message, ctx: &mut AppContext) -> Task<Message> {
        match message {
            Message::TeamsLoaded(Ok(teams)) => {
                self.teams = teams;
                let team = self
                    .teams
                    .iter()
                    .find(|team| team.id == DEFAULT_TEAM_ID)
                    .or_else(|| self.teams.first())
                    .cloned();
                match team {
                    Some(team) => return self.load_team(team, ctx),
                    None => {
                        self.load.succeed();
                        ctx.notifications.warning("No teams available");
                    }
                }
            }
            Message::TeamsLoaded(Err(error)) => {
                ctx.report_data_error("teams", &error);
                self.load.fail(error);
            }
            Message::RosterLoaded { team_id, result } => {
                if !self.is_current(&team_id) {
                    tracing::debug!(%team_id, "dropping roster of deselected team");
                    return Task::none();
                }
                match result {
                    Ok(players) => {
                        self.sheet = AttendanceSheet::new(players.iter().map(|p| p.id));
                        self.players = players;
                        self.engine.refresh(&self.players);
                        self.load.succeed();
                    }
                    Err(error) => {
                        ctx.report_data_error("roster", &error);
                        self.load.fail(error);
                    }
                }
            }
            Message::HistoryLoaded { team_id, result } => {
                if !self.is_current(&team_id) {
                    return Task::none();
                }
                match result {
                    Ok(history) => self.history = history,
                    Err(error) => ctx.report_data_error("attendance history", &error),
                }
            }
            Message::TeamSelected(team) => {
                if self.is_current(&team.id) {
                    return Task::none();
                }
                ctx.notifications.info(format!("Switched to {}", team.name));
                return self.load_team(team, ctx);
            }
            Message::Mark(player_id, status) => {
                if !self.sheet.mark(player_id, status) {
                    return Task::none();
                }
                if let Some(player) = self.players.iter().find(|p| p.id == player_id) {
                    ctx.notifications
                        .info(format!("{} marked as {}", player.name, status.token()));
                }
            }
            Message::SessionNameChanged(value) => self.session_name = value,
            Message::SearchChanged(value) => {
                self.search = value;
                ctx.modals.note_focus(SEARCH);
                return self.debouncer.schedule(Message::SearchElapsed);
            }
            Message::SearchElapsed(token) => {
                if self.debouncer.fire(token) {
                    self.engine.apply_search(&self.players, &self.search);
                }
            }
            Message::NewSession => {
                self.sheet.reset();
                self.session_name.clear();
                ctx.notifications.info("Starting new attendance session...");
            }
            Message::Save => return self.save(ctx),
            Message::Saved { record, result } => {
                self.saving = false;
                match result {
                    Ok(()) => {
                        tracing::info!(id = record.id, session = %record.session, "attendance saved");
                        self.history.insert(0, record);
                        self.sheet.reset();
                        self.session_name.clear();
                        ctx.notifications.success("Attendance saved successfully!");
                    }
                    Err(error) => {
                        tracing::warn!(source = ctx.data.name(), %error, "attendance save failed");
                        ctx.notifications
                            .error(format!("Could not save attendance: {error}"));
                    }
                }
            }
            Message::ShowRecord(id) => {
                self.selected_record = Some(id);
                ctx.modals.open(ModalId::AttendanceDetails, Vec::new());
                return ctx.modals.focus_task();
            }
            Message::CloseRecord => {
                ctx.modals.close(ModalId::AttendanceDetails, Instant::now());
                return ctx.modals.focus_task();
            }
            Message::Retry => {
                return match self.team.clone() {
                    Some(team) => self.load_team(team, ctx),
                    None => self.load_teams(ctx),
                };
            }
            Message::ToggleErrorDetails => self.load.toggle_details(),
        }
        Task::none()
    }

    fn is_current(&self, team_id: &str) -> bool {
        self.team.as_ref().is_some_and(|team| team.id == team_id)
    }

    fn load_teams(&mut self, ctx: &AppContext) -> Task<Message> {
        if !self.load.begin(Instant::now()) {
            return Task::none();
        }
        Task::perform(ctx.data.teams(), Message::TeamsLoaded)
    }

    /// Loads roster and history of `team`; the sheet starts empty.
    fn load_team(&mut self, team: Team, ctx: &AppContext) -> Task<Message> {
        if !self.load.is_loading() {
            self.load.begin(Instant::now());
        }
        let roster = ctx.data.roster(&team);
        let history = ctx.data.attendance_history(&team);
        let roster_team = team.id.clone();
        let history_team = team.id.clone();

        self.players.clear();
        self.history.clear();
        self.sheet = AttendanceSheet::default();
        self.engine.refresh(&self.players);
        self.team = Some(team);

        Task::batch([
            Task::perform(roster, move |result| Message::RosterLoaded {
                team_id: roster_team,
                result,
            }),
            Task::perform(history, move |result| Message::HistoryLoaded {
                team_id: history_team,
                result,
            }),
        ])
    }

    fn save(&mut self, ctx: &mut AppContext) -> Task<Message> {
        if self.saving {
            return Task::none();
        }
        let Some(team) = self.team.as_ref() else {
            return Task::none();
        };
        if self.sheet.is_empty() {
            ctx.notifications.warning("No players to record");
            return Task::none();
        }

        let session = match self.session_name.trim() {
            "" => DEFAULT_SESSION.to_string(),
            name => name.to_string(),
        };
        let submission = AttendanceSubmission {
            team_id: team.id.clone(),
            session,
            date: self.date,
            entries: self.sheet.entries(),
        };
        let id = self.history.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = submission.record(id);

        self.saving = true;
        Task::perform(ctx.data.save_attendance(submission), move |result| {
            Message::Saved { record, result }
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let team_picker = pick_list(self.teams.as_slice(), self.team.clone(), Message::TeamSelected)
            .placeholder("Select team")
            .text_size(typography::BODY);

        let subtitle = self
            .team
            .as_ref()
            .map(|team| format!("{team} · {}", self.date.format(DATE_FORMAT)));
        let header = page::header("Attendance", subtitle, vec![team_picker.into()]);

        let body: Element<'_, Message> = if self.load.is_loading() {
            page::loading(self.load.elapsed(), "Loading squad…")
        } else if let Some(error) = self.load.error() {
            page::load_error(
                "the squad",
                error,
                self.load.details_visible(),
                Message::Retry,
                Message::ToggleErrorDetails,
            )
        } else {
            scrollable(
                Column::new()
                    .spacing(spacing::LG)
                    .push(self.sheet_view())
                    .push(self.history_view()),
            )
            .height(Length::Fill)
            .into()
        };

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(self.overview_view())
            .push(self.toolbar())
            .push(body)
            .into()
    }

    fn overview_view(&self) -> Element<'_, Message> {
        let overview = self.sheet.overview();
        Row::new()
            .spacing(spacing::SM)
            .push(stat_card(
                "Attendance rate",
                format!("{}%", overview.rate_percent()),
                palette::PRIMARY_500,
            ))
            .push(stat_card(
                "Present",
                overview.present.to_string(),
                palette::SUCCESS_500,
            ))
            .push(stat_card("Late", overview.late.to_string(), palette::WARNING_500))
            .push(stat_card("Absent", overview.absent.to_string(), palette::ERROR_500))
            .push(stat_card(
                "Unmarked",
                overview.unmarked.to_string(),
                palette::GRAY_400,
            ))
            .into()
    }

    fn toolbar(&self) -> Element<'_, Message> {
        let session = text_input(DEFAULT_SESSION, &self.session_name)
            .on_input(Message::SessionNameChanged)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fixed(sizing::SEARCH_WIDTH));

        let save_label = Text::new(if self.saving { "Saving…" } else { "Save attendance" })
            .size(typography::BODY);
        let save = if self.saving || self.players.is_empty() {
            button(save_label).style(styles::button::disabled())
        } else {
            button(save_label)
                .on_press(Message::Save)
                .style(styles::button::primary)
        };

        filter_bar::bar(vec![
            filter_bar::search_box(SEARCH, "Search players…", &self.search, Message::SearchChanged),
            session.into(),
            Space::new().width(Length::Fill).into(),
            button(Text::new("New session").size(typography::BODY))
                .on_press(Message::NewSession)
                .style(styles::button::unselected)
                .into(),
            save.into(),
        ])
    }

    fn sheet_view(&self) -> Element<'_, Message> {
        let mut list = Column::new().spacing(spacing::XS).push(filter_bar::summary(
            self.engine.visible_count(),
            self.players.len(),
            "players",
        ));

        if self.engine.is_empty_result() && !self.players.is_empty() {
            list = list.push(page::empty("No players match the search."));
        }

        for (_, player, visibility) in self.engine.visible_items(&self.players) {
            let row = mark_row(player, self.sheet.status(player.id));
            list = list.push(page::card(row, visibility.highlighted));
        }
        list.into()
    }

    fn history_view(&self) -> Element<'_, Message> {
        let mut list = Column::new()
            .spacing(spacing::XS)
            .push(Text::new("Recent sessions").size(typography::TITLE_SM));

        if self.history.is_empty() {
            list = list.push(page::empty("No attendance recorded yet."));
        }

        for record in &self.history {
            let row = Row::new()
                .spacing(spacing::MD)
                .align_y(alignment::Vertical::Center)
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(record.session.as_str()).size(typography::BODY_LG))
                        .push(page::muted(record.date.format(DATE_FORMAT).to_string())),
                )
                .push(Space::new().width(Length::Fill))
                .push(page::muted(format!(
                    "{} present · {} absent",
                    record.present + record.late,
                    record.absent
                )))
                .push(page::badge(
                    format!("{}%", record.rate_percent()),
                    palette::PRIMARY_500,
                ))
                .push(
                    button(Text::new("Details").size(typography::BODY))
                        .on_press(Message::ShowRecord(record.id))
                        .style(styles::button::ghost),
                );
            list = list.push(page::card(row, false));
        }
        list.into()
    }

    /// Dialog content for `modal`, if this page owns it.
    pub fn modal_view(&self, modal: ModalId, alpha: f32) -> Option<Element<'_, Message>> {
        if modal != ModalId::AttendanceDetails {
            return None;
        }
        let record = self.selected_record()?;

        let body = Column::new()
            .spacing(spacing::XS)
            .push(page::detail_row(
                "Date",
                record.date.format(DATE_FORMAT).to_string(),
            ))
            .push(page::detail_row("Present", record.present.to_string()))
            .push(page::detail_row("Late", record.late.to_string()))
            .push(page::detail_row("Absent", record.absent.to_string()))
            .push(page::detail_row("Excused", record.excused.to_string()))
            .push(page::detail_row(
                "Rate",
                format!("{}%", record.rate_percent()),
            ));

        Some(modal::view::dialog(
            record.session.as_str(),
            body,
            Message::CloseRecord,
            alpha,
        ))
    }
}

fn stat_card<'a>(label: &'a str, value: String, accent: Color) -> Element<'a, Message> {
    let value = Text::new(value)
        .size(typography::TITLE_MD)
        .style(move |_theme: &iced::Theme| iced::widget::text::Style {
            color: Some(accent),
        });
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(value)
            .push(page::muted(label)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}

fn mark_row(player: &Player, current: Option<AttendanceStatus>) -> Element<'_, Message> {
    let identity = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(player.name.as_str()).size(typography::BODY_LG))
        .push(page::muted(format!(
            "{} #{}",
            player.position.label(),
            player.number
        )));

    let marks = AttendanceStatus::ALL.iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, status| {
            row.push(
                button(Text::new(status.label()).size(typography::BODY_SM))
                    .on_press(Message::Mark(player.id, *status))
                    .style(styles::button::chip(current == Some(*status))),
            )
        },
    );

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(identity)
        .push(Space::new().width(Length::Fill));
    if let Some(status) = current {
        row = row.push(page::badge(
            status.label(),
            theme::attendance_status_color(status),
        ));
    }
    row.push(marks).into()
}
