// SPDX-License-Identifier: MPL-2.0
//! Medical page: player medical files and the checkup log.
//!
//! Both lists load on first entry and carry their own filters. One search
//! box covers both: player name and team, or checkup player, team and
//! location. "Clear filters" resets the pick-lists of the visible tab and
//! leaves the search alone.

use crate::app::context::AppContext;
use crate::application::port::DataResult;
use crate::domain::filter::{FilterCriterion, ListFilterEngine};
use crate::domain::team::{
    Checkup, CheckupKind, CheckupStatus, MedicalRecord, MedicalStatus, Position, StatusUpdate,
};
use crate::ui::components::filter_bar::{self, Choice};
use crate::ui::components::page;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::forms::{FieldErrors, FormValidator, SUMMARY_MESSAGE};
use crate::ui::modal::{self, FocusId, ModalId};
use crate::ui::state::{Debouncer, LoadState};
use crate::ui::styles;
use crate::ui::theme;
use chrono::{Days, NaiveDate, NaiveTime};
use iced::widget::{button, pick_list, scrollable, text_input, Column, Row, Space, Text};
use iced::{alignment, Element, Length, Task};
use std::fmt;
use std::time::{Duration, Instant};

/// Search box of this page.
pub const SEARCH: FocusId = FocusId::new("medical-search");

const INJURY_INPUT: FocusId = FocusId::new("update-status-injury");
const RECOVERY_INPUT: FocusId = FocusId::new("update-status-recovery");
const NOTES_INPUT: FocusId = FocusId::new("update-status-notes");

const DATE_FORMAT: &str = "%b %-d, %Y";
const DATE_TIME_FORMAT: &str = "%b %-d, %Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Players,
    Checkups,
}

impl Tab {
    const ALL: [Tab; 2] = [Tab::Players, Tab::Checkups];

    fn label(self) -> &'static str {
        match self {
            Tab::Players => "Medical roster",
            Tab::Checkups => "Checkup log",
        }
    }
}

/// Team pick-list entry. Team names come from the loaded records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamFilter {
    #[default]
    Any,
    Named(String),
}

impl TeamFilter {
    /// "All teams" followed by each distinct team, in first-seen order.
    fn options<'a>(teams: impl Iterator<Item = &'a str>) -> Vec<TeamFilter> {
        let mut options = vec![TeamFilter::Any];
        for team in teams {
            let entry = TeamFilter::Named(team.to_string());
            if !options.contains(&entry) {
                options.push(entry);
            }
        }
        options
    }

    fn criterion_value(&self) -> String {
        match self {
            TeamFilter::Any => String::new(),
            TeamFilter::Named(team) => team.clone(),
        }
    }
}

impl fmt::Display for TeamFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamFilter::Any => f.write_str("All teams"),
            TeamFilter::Named(team) => f.write_str(team),
        }
    }
}

#[derive(Debug, Clone)]
pub enum StatusField {
    Status(MedicalStatus),
    Injury(String),
    Recovery(String),
    Notes(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    RecordsLoaded(DataResult<Vec<MedicalRecord>>),
    CheckupsLoaded(DataResult<Vec<Checkup>>),
    TabSelected(Tab),
    SearchChanged(String),
    SearchElapsed(u64),
    TeamSelected(TeamFilter),
    StatusSelected(Choice<MedicalStatus>),
    PositionSelected(Choice<Position>),
    ClearMedicalFilters,
    CheckupTeamSelected(TeamFilter),
    CheckupKindSelected(Choice<CheckupKind>),
    CheckupStatusSelected(Choice<CheckupStatus>),
    ClearCheckupFilters,
    ShowHistory(u32),
    CloseHistory,
    OpenUpdateStatus(u32),
    StatusFormChanged(StatusField),
    SubmitStatus,
    CancelStatus,
    ScheduleCheckup(u32),
    ShowCheckup(u32),
    CloseCheckup,
    CancelCheckup(u32),
    Retry,
    ToggleErrorDetails,
}

/// Values typed into the "Update status" form.
#[derive(Debug, Clone, Default)]
struct StatusForm {
    status: Option<MedicalStatus>,
    injury: String,
    recovery: String,
    notes: String,
    errors: FieldErrors,
}

impl StatusForm {
    fn for_record(record: &MedicalRecord) -> Self {
        Self {
            status: Some(record.status),
            injury: record.injury.clone().unwrap_or_default(),
            recovery: record.recovery.clone().unwrap_or_default(),
            notes: String::new(),
            errors: FieldErrors::default(),
        }
    }

    /// Injury and recovery are required only when the status calls for them.
    fn validator(&self) -> FormValidator {
        let mut validator = FormValidator::new().required("status");
        if self.status.is_some_and(MedicalStatus::needs_injury) {
            validator = validator.required("injury");
        }
        if self.status.is_some_and(MedicalStatus::needs_recovery) {
            validator = validator.required("recovery");
        }
        validator
    }

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => self.status.map(MedicalStatus::label),
            "injury" => Some(&self.injury),
            "recovery" => Some(&self.recovery),
            _ => None,
        }
    }

    fn set(&mut self, field: StatusField) {
        let name = match field {
            StatusField::Status(status) => {
                self.status = Some(status);
                "status"
            }
            StatusField::Injury(value) => {
                self.injury = value;
                "injury"
            }
            StatusField::Recovery(value) => {
                self.recovery = value;
                "recovery"
            }
            StatusField::Notes(value) => {
                self.notes = value;
                "notes"
            }
        };
        self.errors.clear_field(name);
    }

    fn submit(&mut self) -> Option<StatusUpdate> {
        if let Err(errors) = self.validator().validate(|field| self.value(field)) {
            self.errors = errors;
            return None;
        }
        Some(StatusUpdate {
            status: self.status?,
            injury: self.injury.clone(),
            recovery: self.recovery.clone(),
            notes: self.notes.clone(),
        })
    }
}

#[derive(Debug)]
pub struct State {
    tab: Tab,
    today: NaiveDate,
    search: String,
    debouncer: Debouncer,

    records: Vec<MedicalRecord>,
    record_engine: ListFilterEngine,
    team: TeamFilter,
    status: Choice<MedicalStatus>,
    position: Choice<Position>,
    records_load: LoadState,

    checkups: Vec<Checkup>,
    checkup_engine: ListFilterEngine,
    checkup_team: TeamFilter,
    checkup_kind: Choice<CheckupKind>,
    checkup_status: Choice<CheckupStatus>,
    checkups_load: LoadState,

    selected_player: Option<u32>,
    selected_checkup: Option<u32>,
    form: StatusForm,
}

impl State {
    #[must_use]
    pub fn new(search_debounce: Duration) -> Self {
        Self::on(chrono::Local::now().date_naive(), search_debounce)
    }

    /// A page that dates status changes and new checkups from `today`.
    #[must_use]
    pub fn on(today: NaiveDate, search_debounce: Duration) -> Self {
        Self {
            tab: Tab::default(),
            today,
            search: String::new(),
            debouncer: Debouncer::new(search_debounce),
            records: Vec::new(),
            record_engine: ListFilterEngine::new(),
            team: TeamFilter::Any,
            status: Choice::Any,
            position: Choice::Any,
            records_load: LoadState::new(),
            checkups: Vec::new(),
            checkup_engine: ListFilterEngine::new(),
            checkup_team: TeamFilter::Any,
            checkup_kind: Choice::Any,
            checkup_status: Choice::Any,
            checkups_load: LoadState::new(),
            selected_player: None,
            selected_checkup: None,
            form: StatusForm::default(),
        }
    }

    /// Starts the first loads when the page is shown.
    pub fn enter(&mut self, ctx: &mut AppContext) -> Task<Message> {
        let records = if self.records_load.needs_load() {
            self.load_records(ctx)
        } else {
            Task::none()
        };
        let checkups = if self.checkups_load.needs_load() {
            self.load_checkups(ctx)
        } else {
            Task::none()
        };
        Task::batch([records, checkups])
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.records_load.is_loading() || self.checkups_load.is_loading()
    }

    pub fn tick(&mut self, now: Instant) {
        self.records_load.tick(now);
        self.checkups_load.tick(now);
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn records(&self) -> &[MedicalRecord] {
        &self.records
    }

    #[must_use]
    pub fn checkups(&self) -> &[Checkup] {
        &self.checkups
    }

    #[must_use]
    pub fn record_engine(&self) -> &ListFilterEngine {
        &self.record_engine
    }

    #[must_use]
    pub fn checkup_engine(&self) -> &ListFilterEngine {
        &self.checkup_engine
    }

    #[must_use]
    pub fn selected_player(&self) -> Option<&MedicalRecord> {
        let id = self.selected_player?;
        self.records.iter().find(|record| record.player_id == id)
    }

    #[must_use]
    pub fn selected_checkup(&self) -> Option<&Checkup> {
        let id = self.selected_checkup?;
        self.checkups.iter().find(|checkup| checkup.id == id)
    }

    pub fn update(&mut self, message: Message, ctx: &mut AppContext) -> Task<Message> {
        match message {
            Message::RecordsLoaded(Ok(records)) => {
                self.records = records;
                self.record_engine.refresh(&self.records);
                self.records_load.succeed();
            }
            Message::RecordsLoaded(Err(error)) => {
                ctx.report_data_error("medical records", &error);
                self.records_load.fail(error);
            }
            Message::CheckupsLoaded(Ok(mut checkups)) => {
                checkups.sort_by_key(|checkup| checkup.at);
                self.checkups = checkups;
                self.checkup_engine.refresh(&self.checkups);
                self.checkups_load.succeed();
            }
            Message::CheckupsLoaded(Err(error)) => {
                ctx.report_data_error("checkups", &error);
                self.checkups_load.fail(error);
            }
            Message::TabSelected(tab) => self.tab = tab,
            Message::SearchChanged(value) => {
                self.search = value;
                ctx.modals.note_focus(SEARCH);
                return self.debouncer.schedule(Message::SearchElapsed);
            }
            Message::SearchElapsed(token) => {
                if self.debouncer.fire(token) {
                    self.record_engine.apply_search(&self.records, &self.search);
                    self.checkup_engine.apply_search(&self.checkups, &self.search);
                }
            }
            Message::TeamSelected(team) => {
                self.team = team;
                self.apply_record_filters();
            }
            Message::StatusSelected(choice) => {
                self.status = choice;
                self.apply_record_filters();
            }
            Message::PositionSelected(choice) => {
                self.position = choice;
                self.apply_record_filters();
            }
            Message::ClearMedicalFilters => {
                self.team = TeamFilter::Any;
                self.status = Choice::Any;
                self.position = Choice::Any;
                self.apply_record_filters();
            }
            Message::CheckupTeamSelected(team) => {
                self.checkup_team = team;
                self.apply_checkup_filters();
            }
            Message::CheckupKindSelected(choice) => {
                self.checkup_kind = choice;
                self.apply_checkup_filters();
            }
            Message::CheckupStatusSelected(choice) => {
                self.checkup_status = choice;
                self.apply_checkup_filters();
            }
            Message::ClearCheckupFilters => {
                self.checkup_team = TeamFilter::Any;
                self.checkup_kind = Choice::Any;
                self.checkup_status = Choice::Any;
                self.apply_checkup_filters();
            }
            Message::ShowHistory(player_id) => {
                self.selected_player = Some(player_id);
                ctx.modals.open(ModalId::MedicalHistory, Vec::new());
                return ctx.modals.focus_task();
            }
            Message::CloseHistory => {
                ctx.modals.close(ModalId::MedicalHistory, Instant::now());
                return ctx.modals.focus_task();
            }
            Message::OpenUpdateStatus(player_id) => return self.open_update_status(player_id, ctx),
            Message::StatusFormChanged(field) => {
                let focus = match &field {
                    StatusField::Injury(_) => Some(INJURY_INPUT),
                    StatusField::Recovery(_) => Some(RECOVERY_INPUT),
                    StatusField::Notes(_) => Some(NOTES_INPUT),
                    StatusField::Status(_) => None,
                };
                if let Some(id) = focus {
                    ctx.modals.note_focus(id);
                }
                self.form.set(field);
            }
            Message::SubmitStatus => return self.submit_status(ctx),
            Message::CancelStatus => {
                ctx.modals.close(ModalId::UpdateStatus, Instant::now());
                return ctx.modals.focus_task();
            }
            Message::ScheduleCheckup(player_id) => self.schedule_checkup(player_id, ctx),
            Message::ShowCheckup(id) => {
                self.selected_checkup = Some(id);
                ctx.modals.open(ModalId::CheckupDetails, Vec::new());
                return ctx.modals.focus_task();
            }
            Message::CloseCheckup => {
                ctx.modals.close(ModalId::CheckupDetails, Instant::now());
                return ctx.modals.focus_task();
            }
            Message::CancelCheckup(id) => {
                let Some(checkup) = self.checkups.iter_mut().find(|c| c.id == id) else {
                    return Task::none();
                };
                if checkup.cancel() {
                    ctx.notifications.success(format!("Checkup {id} cancelled"));
                    self.checkup_engine.refresh(&self.checkups);
                } else {
                    tracing::debug!(id, status = %checkup.status, "checkup not cancellable");
                }
            }
            Message::Retry => {
                let records = if self.records_load.error().is_some() {
                    self.load_records(ctx)
                } else {
                    Task::none()
                };
                let checkups = if self.checkups_load.error().is_some() {
                    self.load_checkups(ctx)
                } else {
                    Task::none()
                };
                return Task::batch([records, checkups]);
            }
            Message::ToggleErrorDetails => match self.tab {
                Tab::Players => self.records_load.toggle_details(),
                Tab::Checkups => self.checkups_load.toggle_details(),
            },
        }
        Task::none()
    }

    fn load_records(&mut self, ctx: &AppContext) -> Task<Message> {
        if !self.records_load.begin(Instant::now()) {
            return Task::none();
        }
        Task::perform(ctx.data.medical_records(), Message::RecordsLoaded)
    }

    fn load_checkups(&mut self, ctx: &AppContext) -> Task<Message> {
        if !self.checkups_load.begin(Instant::now()) {
            return Task::none();
        }
        Task::perform(ctx.data.checkups(), Message::CheckupsLoaded)
    }

    fn apply_record_filters(&mut self) {
        let criteria = vec![
            FilterCriterion::equals("team", self.team.criterion_value()),
            FilterCriterion::equals("status", self.status.criterion_value()),
            FilterCriterion::contains("position", self.position.criterion_value()),
        ];
        self.record_engine.apply_filters(&self.records, criteria);
    }

    fn apply_checkup_filters(&mut self) {
        let criteria = vec![
            FilterCriterion::equals("team", self.checkup_team.criterion_value()),
            FilterCriterion::equals("type", self.checkup_kind.criterion_value()),
            FilterCriterion::equals("status", self.checkup_status.criterion_value()),
        ];
        self.checkup_engine.apply_filters(&self.checkups, criteria);
    }

    fn record_filters_active(&self) -> bool {
        self.team != TeamFilter::Any || self.status != Choice::Any || self.position != Choice::Any
    }

    fn checkup_filters_active(&self) -> bool {
        self.checkup_team != TeamFilter::Any
            || self.checkup_kind != Choice::Any
            || self.checkup_status != Choice::Any
    }

    fn open_update_status(&mut self, player_id: u32, ctx: &mut AppContext) -> Task<Message> {
        let Some(record) = self.records.iter().find(|r| r.player_id == player_id) else {
            return Task::none();
        };
        self.form = StatusForm::for_record(record);
        self.selected_player = Some(player_id);

        let mut focusables = Vec::new();
        if record.status.needs_injury() {
            focusables.push(INJURY_INPUT);
        }
        if record.status.needs_recovery() {
            focusables.push(RECOVERY_INPUT);
        }
        focusables.push(NOTES_INPUT);
        ctx.modals.open(ModalId::UpdateStatus, focusables);
        ctx.modals.focus_task()
    }

    fn submit_status(&mut self, ctx: &mut AppContext) -> Task<Message> {
        let Some(update) = self.form.submit() else {
            ctx.notifications.error(SUMMARY_MESSAGE);
            return Task::none();
        };
        let today = self.today;
        let Some(record) = self
            .selected_player
            .and_then(|id| self.records.iter_mut().find(|r| r.player_id == id))
        else {
            return Task::none();
        };

        tracing::info!(player = record.player_id, status = %update.status, "medical status updated");
        record.apply(update, today);
        self.record_engine.refresh(&self.records);
        self.form = StatusForm::default();
        ctx.notifications.success("Player status updated successfully!");
        ctx.modals.close(ModalId::UpdateStatus, Instant::now());
        ctx.modals.focus_task()
    }

    /// Books a routine checkup for tomorrow morning.
    fn schedule_checkup(&mut self, player_id: u32, ctx: &mut AppContext) {
        let Some(record) = self.records.iter().find(|r| r.player_id == player_id) else {
            return;
        };
        let day = self.today.checked_add_days(Days::new(1)).unwrap_or(self.today);
        let at = day.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default());
        let id = self.checkups.iter().map(|c| c.id).max().unwrap_or(0) + 1;

        let checkup = Checkup::routine(id, record, at);
        ctx.notifications
            .success(format!("Checkup scheduled for {}", record.name));
        self.checkups.push(checkup);
        self.checkups.sort_by_key(|checkup| checkup.at);
        self.checkup_engine.refresh(&self.checkups);
    }

    pub fn view(&self) -> Element<'_, Message> {
        let injured = self
            .records
            .iter()
            .filter(|r| r.status == MedicalStatus::Injured)
            .count();
        let header = page::header(
            "Medical",
            Some(format!("{injured} injured players")),
            Vec::new(),
        );

        let tabs = Tab::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, tab| {
            row.push(
                button(Text::new(tab.label()).size(typography::BODY))
                    .on_press(Message::TabSelected(*tab))
                    .style(styles::button::chip(self.tab == *tab)),
            )
        });

        let (load, filters) = match self.tab {
            Tab::Players => (&self.records_load, self.record_filter_bar()),
            Tab::Checkups => (&self.checkups_load, self.checkup_filter_bar()),
        };

        let body: Element<'_, Message> = if load.is_loading() {
            page::loading(load.elapsed(), "Loading medical data…")
        } else if let Some(error) = load.error() {
            page::load_error(
                "medical data",
                error,
                load.details_visible(),
                Message::Retry,
                Message::ToggleErrorDetails,
            )
        } else {
            match self.tab {
                Tab::Players => self.records_view(),
                Tab::Checkups => self.checkups_view(),
            }
        };

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(tabs)
            .push(filters)
            .push(body)
            .into()
    }

    fn record_filter_bar(&self) -> Element<'_, Message> {
        let teams = TeamFilter::options(self.records.iter().map(|r| r.team.as_str()));
        filter_bar::bar(vec![
            filter_bar::search_box(
                SEARCH,
                "Search players or teams…",
                &self.search,
                Message::SearchChanged,
            ),
            pick_list(teams, Some(self.team.clone()), Message::TeamSelected)
                .width(Length::Fixed(sizing::FILTER_WIDTH))
                .text_size(typography::BODY)
                .into(),
            filter_bar::picker(self.status, Message::StatusSelected),
            filter_bar::picker(self.position, Message::PositionSelected),
            filter_bar::clear_button(self.record_filters_active(), Message::ClearMedicalFilters),
        ])
    }

    fn checkup_filter_bar(&self) -> Element<'_, Message> {
        let teams = TeamFilter::options(self.checkups.iter().map(|c| c.team.as_str()));
        filter_bar::bar(vec![
            filter_bar::search_box(
                SEARCH,
                "Search checkups…",
                &self.search,
                Message::SearchChanged,
            ),
            filter_bar::picker(self.checkup_kind, Message::CheckupKindSelected),
            filter_bar::picker(self.checkup_status, Message::CheckupStatusSelected),
            pick_list(teams, Some(self.checkup_team.clone()), Message::CheckupTeamSelected)
                .width(Length::Fixed(sizing::FILTER_WIDTH))
                .text_size(typography::BODY)
                .into(),
            filter_bar::clear_button(self.checkup_filters_active(), Message::ClearCheckupFilters),
        ])
    }

    fn records_view(&self) -> Element<'_, Message> {
        let mut list = Column::new().spacing(spacing::XS).push(filter_bar::summary(
            self.record_engine.visible_count(),
            self.records.len(),
            "players",
        ));
        if self.record_engine.is_empty_result() && !self.records.is_empty() {
            list = list.push(page::empty("No players match the current filters."));
        }
        for (_, record, visibility) in self.record_engine.visible_items(&self.records) {
            list = list.push(page::card(record_row(record), visibility.highlighted));
        }
        scrollable(list).height(Length::Fill).into()
    }

    fn checkups_view(&self) -> Element<'_, Message> {
        let mut list = Column::new().spacing(spacing::XS).push(filter_bar::summary(
            self.checkup_engine.visible_count(),
            self.checkups.len(),
            "checkups",
        ));
        if self.checkup_engine.is_empty_result() && !self.checkups.is_empty() {
            list = list.push(page::empty("No checkups match the current filters."));
        }
        for (_, checkup, visibility) in self.checkup_engine.visible_items(&self.checkups) {
            list = list.push(page::card(checkup_row(checkup), visibility.highlighted));
        }
        scrollable(list).height(Length::Fill).into()
    }

    /// Dialog content for `modal`, if this page owns it.
    pub fn modal_view(&self, modal: ModalId, alpha: f32) -> Option<Element<'_, Message>> {
        match modal {
            ModalId::MedicalHistory => {
                let record = self.selected_player()?;
                Some(modal::view::dialog(
                    format!("{} · history", record.name),
                    history_view(record),
                    Message::CloseHistory,
                    alpha,
                ))
            }
            ModalId::UpdateStatus => {
                let record = self.selected_player()?;
                Some(modal::view::dialog(
                    format!("Update status · {}", record.name),
                    self.form_view(),
                    Message::CancelStatus,
                    alpha,
                ))
            }
            ModalId::CheckupDetails => {
                let checkup = self.selected_checkup()?;
                Some(modal::view::dialog(
                    format!("Checkup {}", checkup.id),
                    checkup_details(checkup),
                    Message::CloseCheckup,
                    alpha,
                ))
            }
            _ => None,
        }
    }

    fn form_view(&self) -> Element<'_, Message> {
        let form = &self.form;
        let errors = &form.errors;

        let status = pick_list(MedicalStatus::ALL, form.status, |status| {
            Message::StatusFormChanged(StatusField::Status(status))
        })
        .placeholder("Select status");

        let mut column = Column::new()
            .spacing(spacing::SM)
            .push(labeled("Status *", status, errors.get("status")));

        if form.status.is_some_and(MedicalStatus::needs_injury) {
            column = column.push(labeled(
                "Injury details *",
                form_input(INJURY_INPUT, "e.g. Hamstring strain", &form.injury, StatusField::Injury),
                errors.get("injury"),
            ));
        }
        if form.status.is_some_and(MedicalStatus::needs_recovery) {
            column = column.push(labeled(
                "Expected recovery *",
                form_input(RECOVERY_INPUT, "e.g. 2-3 weeks", &form.recovery, StatusField::Recovery),
                errors.get("recovery"),
            ));
        }

        let buttons = Row::new()
            .spacing(spacing::SM)
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new("Cancel").size(typography::BODY))
                    .on_press(Message::CancelStatus)
                    .style(styles::button::unselected),
            )
            .push(
                button(Text::new("Update status").size(typography::BODY))
                    .on_press(Message::SubmitStatus)
                    .style(styles::button::primary),
            );

        column
            .push(labeled(
                "Notes",
                form_input(NOTES_INPUT, "Optional", &form.notes, StatusField::Notes),
                None,
            ))
            .push(buttons)
            .into()
    }
}

fn form_input<'a>(
    id: FocusId,
    placeholder: &'a str,
    value: &'a str,
    wrap: fn(String) -> StatusField,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .id(id.widget_id())
        .on_input(move |value| Message::StatusFormChanged(wrap(value)))
        .on_submit(Message::SubmitStatus)
        .padding(spacing::XS)
        .size(typography::BODY)
        .into()
}

fn labeled<'a>(
    label: &'a str,
    control: impl Into<Element<'a, Message>>,
    error: Option<&'static str>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(page::muted(label))
        .push(control);
    if let Some(error) = page::field_error(error) {
        column = column.push(error);
    }
    column.into()
}

fn action<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .on_press(message)
        .style(styles::button::unselected)
        .into()
}

fn record_row(record: &MedicalRecord) -> Element<'_, Message> {
    let mut identity = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(record.name.as_str()).size(typography::BODY_LG))
        .push(page::muted(format!(
            "{} · {}",
            record.team,
            record.position.label()
        )));
    if let Some(injury) = &record.injury {
        identity = identity.push(page::muted(injury.as_str()));
    }
    if let Some(recovery) = &record.recovery {
        identity = identity.push(page::muted(format!("Recovery: {recovery}")));
    }

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(action("History", Message::ShowHistory(record.player_id)))
        .push(action("Update status", Message::OpenUpdateStatus(record.player_id)))
        .push(action("Schedule checkup", Message::ScheduleCheckup(record.player_id)));

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(identity)
        .push(Space::new().width(Length::Fill))
        .push(page::muted(format!(
            "Last checkup {}",
            record.last_checkup.format(DATE_FORMAT)
        )))
        .push(page::badge(
            record.status.label(),
            theme::medical_status_color(record.status),
        ))
        .push(actions)
        .into()
}

fn checkup_row(checkup: &Checkup) -> Element<'_, Message> {
    let what = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(checkup.player.as_str()).size(typography::BODY_LG))
        .push(page::muted(format!(
            "{} · {}",
            checkup.team,
            checkup.at.format(DATE_TIME_FORMAT)
        )));

    let mut actions = Row::new()
        .spacing(spacing::XS)
        .push(action("Details", Message::ShowCheckup(checkup.id)));
    if checkup.status == CheckupStatus::Scheduled {
        actions = actions.push(action("Cancel", Message::CancelCheckup(checkup.id)));
    }

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(what)
        .push(Space::new().width(Length::Fill))
        .push(page::badge(checkup.kind.label(), palette::PRIMARY_500))
        .push(page::badge(
            checkup.status.label(),
            theme::checkup_status_color(checkup.status),
        ))
        .push(actions)
        .into()
}

fn history_view(record: &MedicalRecord) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(page::detail_row("Status", record.status.label()))
        .push(page::detail_row(
            "Last checkup",
            record.last_checkup.format(DATE_FORMAT).to_string(),
        ));

    if record.history.is_empty() {
        return column.push(page::muted("No medical history")).into();
    }
    for event in record.history.iter().rev() {
        let mut entry = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(event.title.as_str()).size(typography::BODY))
            .push(page::muted(event.date.format(DATE_FORMAT).to_string()));
        if !event.note.is_empty() {
            entry = entry.push(page::muted(event.note.as_str()));
        }
        column = column.push(entry);
    }
    column.into()
}

fn checkup_details(checkup: &Checkup) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(page::detail_row("Player", checkup.player.as_str()))
        .push(page::detail_row("Team", checkup.team.as_str()))
        .push(page::detail_row("Type", checkup.kind.label()))
        .push(page::detail_row(
            "When",
            checkup.at.format(DATE_TIME_FORMAT).to_string(),
        ))
        .push(page::detail_row("Location", checkup.location.as_str()))
        .push(page::detail_row("Status", checkup.status.label()));
    if !checkup.findings.is_empty() {
        column = column.push(page::detail_row("Findings", checkup.findings.as_str()));
    }
    if checkup.status == CheckupStatus::Scheduled {
        column = column.push(
            Row::new().push(Space::new().width(Length::Fill)).push(
                button(Text::new("Cancel checkup").size(typography::BODY))
                    .on_press(Message::CancelCheckup(checkup.id))
                    .style(styles::button::unselected),
            ),
        );
    }
    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::application::port::DataError;
    use crate::infrastructure::{fixtures, MockDataSource};
    use crate::ui::forms::REQUIRED_MESSAGE;
    use crate::ui::notifications::Severity;
    use std::sync::Arc;

    fn context() -> AppContext {
        AppContext::new(
            Config::default(),
            Arc::new(MockDataSource::new(Duration::ZERO)),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
    }

    fn loaded(ctx: &mut AppContext) -> State {
        let mut state = State::on(today(), Duration::from_millis(300));
        let _ = state.enter(ctx);
        let _ = state.update(Message::RecordsLoaded(Ok(fixtures::medical_records())), ctx);
        let _ = state.update(Message::CheckupsLoaded(Ok(fixtures::checkups())), ctx);
        ctx.notifications.clear();
        state
    }

    fn visible_records(state: &State) -> Vec<&MedicalRecord> {
        state
            .record_engine()
            .visible_items(state.records())
            .map(|(_, record, _)| record)
            .collect()
    }

    fn visible_checkups(state: &State) -> Vec<&Checkup> {
        state
            .checkup_engine()
            .visible_items(state.checkups())
            .map(|(_, checkup, _)| checkup)
            .collect()
    }

    fn injured_id(state: &State) -> u32 {
        state
            .records()
            .iter()
            .find(|r| r.status == MedicalStatus::Injured)
            .map(|r| r.player_id)
            .expect("injured fixture")
    }

    #[test]
    fn enter_loads_both_lists_once() {
        let mut ctx = context();
        let mut state = State::on(today(), Duration::ZERO);
        let _ = state.enter(&mut ctx);
        assert!(state.is_loading());
        let _ = state.update(Message::RecordsLoaded(Ok(fixtures::medical_records())), &mut ctx);
        assert!(state.is_loading(), "checkups still pending");
        let _ = state.update(Message::CheckupsLoaded(Ok(fixtures::checkups())), &mut ctx);
        assert!(!state.is_loading());
    }

    #[test]
    fn team_status_and_position_filters_combine() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let _ = state.update(
            Message::TeamSelected(TeamFilter::Named("Senior Squad".to_string())),
            &mut ctx,
        );
        let _ = state.update(
            Message::StatusSelected(Choice::Only(MedicalStatus::Fit)),
            &mut ctx,
        );

        let shown = visible_records(&state);
        assert!(!shown.is_empty());
        assert!(shown
            .iter()
            .all(|r| r.team == "Senior Squad" && r.status == MedicalStatus::Fit));

        let _ = state.update(
            Message::PositionSelected(Choice::Only(Position::Goalkeeper)),
            &mut ctx,
        );
        assert_eq!(visible_records(&state).len(), 1);
    }

    #[test]
    fn clearing_medical_filters_keeps_search() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let _ = state.update(Message::SearchChanged("under 19".to_string()), &mut ctx);
        let _ = state.update(Message::SearchElapsed(1), &mut ctx);
        let _ = state.update(
            Message::StatusSelected(Choice::Only(MedicalStatus::Injured)),
            &mut ctx,
        );
        assert_eq!(visible_records(&state).len(), 1);

        let _ = state.update(Message::ClearMedicalFilters, &mut ctx);
        let shown = visible_records(&state);
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|r| r.team == "Under 19"));
    }

    #[test]
    fn checkup_filters_and_clear() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let _ = state.update(
            Message::CheckupKindSelected(Choice::Only(CheckupKind::Injury)),
            &mut ctx,
        );
        let _ = state.update(
            Message::CheckupStatusSelected(Choice::Only(CheckupStatus::Scheduled)),
            &mut ctx,
        );
        let shown = visible_checkups(&state);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].player, "Adham Wael");

        let _ = state.update(Message::ClearCheckupFilters, &mut ctx);
        assert_eq!(visible_checkups(&state).len(), state.checkups().len());
    }

    #[test]
    fn team_options_are_distinct() {
        let options = TeamFilter::options(["A", "B", "A"].into_iter());
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].to_string(), "All teams");
    }

    #[test]
    fn injured_status_requires_details() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let fit = state
            .records()
            .iter()
            .find(|r| r.status == MedicalStatus::Fit)
            .map(|r| r.player_id)
            .expect("fit fixture");

        let _ = state.update(Message::OpenUpdateStatus(fit), &mut ctx);
        assert!(ctx.modals.is_open(ModalId::UpdateStatus));
        let _ = state.update(
            Message::StatusFormChanged(StatusField::Status(MedicalStatus::Injured)),
            &mut ctx,
        );
        let _ = state.update(Message::SubmitStatus, &mut ctx);

        assert!(ctx.modals.is_open(ModalId::UpdateStatus));
        assert_eq!(state.form.errors.get("injury"), Some(REQUIRED_MESSAGE));
        assert_eq!(state.form.errors.get("recovery"), Some(REQUIRED_MESSAGE));
        let toast = ctx.notifications.visible().next().expect("toast");
        assert_eq!(toast.message(), SUMMARY_MESSAGE);
    }

    #[test]
    fn status_update_applies_and_logs_history() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let id = injured_id(&state);

        let _ = state.update(Message::OpenUpdateStatus(id), &mut ctx);
        let before = state.selected_player().map_or(0, |r| r.history.len());
        let _ = state.update(
            Message::StatusFormChanged(StatusField::Status(MedicalStatus::Fit)),
            &mut ctx,
        );
        let _ = state.update(Message::SubmitStatus, &mut ctx);

        let record = state.selected_player().expect("record");
        assert_eq!(record.status, MedicalStatus::Fit);
        assert_eq!(record.injury, None);
        assert_eq!(record.history.len(), before + 1);
        assert_eq!(record.history.last().map(|e| e.date), Some(today()));
        assert!(!ctx.modals.is_open(ModalId::UpdateStatus));
        let toast = ctx.notifications.visible().next().expect("toast");
        assert_eq!(toast.message(), "Player status updated successfully!");
    }

    #[test]
    fn scheduling_adds_a_checkup_for_tomorrow() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let id = injured_id(&state);
        let name = state
            .records()
            .iter()
            .find(|r| r.player_id == id)
            .map(|r| r.name.clone())
            .expect("record");
        let before = state.checkups().len();

        let _ = state.update(Message::ScheduleCheckup(id), &mut ctx);

        assert_eq!(state.checkups().len(), before + 1);
        let added = state
            .checkups()
            .iter()
            .max_by_key(|c| c.id)
            .expect("checkup");
        assert_eq!(added.player_id, id);
        assert_eq!(added.status, CheckupStatus::Scheduled);
        assert_eq!(added.at.date(), NaiveDate::from_ymd_opt(2024, 3, 16).expect("date"));
        let toast = ctx.notifications.visible().next().expect("toast");
        assert_eq!(toast.message(), format!("Checkup scheduled for {name}"));
    }

    #[test]
    fn only_scheduled_checkups_cancel() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let scheduled = state
            .checkups()
            .iter()
            .find(|c| c.status == CheckupStatus::Scheduled)
            .map(|c| c.id)
            .expect("scheduled fixture");
        let completed = state
            .checkups()
            .iter()
            .find(|c| c.status == CheckupStatus::Completed)
            .map(|c| c.id)
            .expect("completed fixture");

        let _ = state.update(Message::CancelCheckup(completed), &mut ctx);
        assert_eq!(ctx.notifications.visible_count(), 0);

        let _ = state.update(Message::CancelCheckup(scheduled), &mut ctx);
        let toast = ctx.notifications.visible().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.message(), format!("Checkup {scheduled} cancelled"));
    }

    #[test]
    fn history_and_checkup_modals_open_and_close() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let id = injured_id(&state);
        let _ = state.update(Message::ShowHistory(id), &mut ctx);
        assert!(ctx.modals.is_open(ModalId::MedicalHistory));
        let _ = state.update(Message::CloseHistory, &mut ctx);
        assert!(!ctx.modals.is_open(ModalId::MedicalHistory));

        let checkup = state.checkups()[0].id;
        let _ = state.update(Message::ShowCheckup(checkup), &mut ctx);
        assert!(ctx.modals.is_open(ModalId::CheckupDetails));
        assert_eq!(state.selected_checkup().map(|c| c.id), Some(checkup));
    }

    #[test]
    fn record_load_failure_reports_error_and_retries() {
        let mut ctx = context();
        let mut state = State::on(today(), Duration::ZERO);
        let _ = state.enter(&mut ctx);
        let _ = state.update(Message::CheckupsLoaded(Ok(fixtures::checkups())), &mut ctx);
        let _ = state.update(
            Message::RecordsLoaded(Err(DataError::Status(503))),
            &mut ctx,
        );
        assert!(!state.is_loading());
        let toast = ctx.notifications.visible().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Error);
        assert!(toast.message().contains("503"));

        let _ = state.update(Message::Retry, &mut ctx);
        assert!(state.is_loading());
    }
}
