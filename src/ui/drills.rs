// SPDX-License-Identifier: MPL-2.0
//! Drill library: filterable drill cards, favorites and the "New drill" form.
//!
//! Pick-list criteria (sport, type, difficulty, duration) and the category
//! chips all feed one filter pass, so they combine with AND semantics.

use crate::app::context::AppContext;
use crate::application::port::DataResult;
use crate::domain::filter::{DurationBucket, FilterCriterion, ListFilterEngine};
use crate::domain::team::{Difficulty, Drill, DrillKind, Sport};
use crate::ui::components::filter_bar::{self, Choice};
use crate::ui::components::page;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::forms::{FieldErrors, FormValidator, SUMMARY_MESSAGE};
use crate::ui::modal::{self, FocusId, ModalId};
use crate::ui::state::{Debouncer, LoadState};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{
    button, pick_list, scrollable, text_input, Column, Row, Space, Text, TextInput,
};
use iced::{alignment, Element, Length, Task};
use std::fmt;
use std::time::{Duration, Instant};

/// Search box of this page.
pub const SEARCH: FocusId = FocusId::new("drills-search");

const TITLE_INPUT: FocusId = FocusId::new("new-drill-title");
const MINUTES_INPUT: FocusId = FocusId::new("new-drill-minutes");
const PLAYERS_INPUT: FocusId = FocusId::new("new-drill-players");
const SPACE_INPUT: FocusId = FocusId::new("new-drill-space");
const DESCRIPTION_INPUT: FocusId = FocusId::new("new-drill-description");

/// Author recorded on drills created in this app.
const OWN_AUTHOR: &str = "You";

/// Category chip above the drill grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Favorites,
    Kind(DrillKind),
}

impl Category {
    fn chips() -> impl Iterator<Item = Category> {
        [Category::All, Category::Favorites]
            .into_iter()
            .chain(DrillKind::ALL.iter().copied().map(Category::Kind))
    }

    fn criterion(self) -> FilterCriterion {
        match self {
            Category::All => FilterCriterion::has_tag("category", ""),
            Category::Favorites => {
                FilterCriterion::custom("category", "favorites", |meta, _| {
                    meta.flag_field("favorite")
                })
            }
            Category::Kind(kind) => FilterCriterion::has_tag("category", kind.token()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str("All drills"),
            Category::Favorites => f.write_str("Favorites"),
            Category::Kind(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FormField {
    Title(String),
    Minutes(String),
    Players(String),
    Space(String),
    Description(String),
    Sport(Sport),
    Kind(DrillKind),
    Difficulty(Difficulty),
}

#[derive(Debug, Clone)]
pub enum Message {
    DrillsLoaded(DataResult<Vec<Drill>>),
    SportSelected(Choice<Sport>),
    KindSelected(Choice<DrillKind>),
    DifficultySelected(Choice<Difficulty>),
    DurationSelected(Choice<DurationBucket>),
    CategorySelected(Category),
    SearchChanged(String),
    SearchElapsed(u64),
    ClearFilters,
    ToggleFavorite(u32),
    Assign(u32),
    ShowDetails(u32),
    CloseDetails,
    OpenNewDrill,
    FormChanged(FormField),
    SubmitNewDrill,
    CancelNewDrill,
    Retry,
    ToggleErrorDetails,
}

/// Values typed into the "New drill" form.
#[derive(Debug, Clone, Default)]
struct DrillForm {
    title: String,
    minutes: String,
    players: String,
    space: String,
    description: String,
    sport: Option<Sport>,
    kind: Option<DrillKind>,
    difficulty: Option<Difficulty>,
    errors: FieldErrors,
}

impl DrillForm {
    fn validator() -> FormValidator {
        FormValidator::new()
            .required("title")
            .positive_integer("minutes")
            .required("sport")
    }

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "minutes" => Some(&self.minutes),
            "sport" => self.sport.map(Sport::label),
            _ => None,
        }
    }

    fn set(&mut self, field: FormField) {
        let name = match field {
            FormField::Title(value) => {
                self.title = value;
                "title"
            }
            FormField::Minutes(value) => {
                self.minutes = value;
                "minutes"
            }
            FormField::Players(value) => {
                self.players = value;
                "players"
            }
            FormField::Space(value) => {
                self.space = value;
                "space"
            }
            FormField::Description(value) => {
                self.description = value;
                "description"
            }
            FormField::Sport(sport) => {
                self.sport = Some(sport);
                "sport"
            }
            FormField::Kind(kind) => {
                self.kind = Some(kind);
                "kind"
            }
            FormField::Difficulty(difficulty) => {
                self.difficulty = Some(difficulty);
                "difficulty"
            }
        };
        self.errors.clear_field(name);
    }

    /// Builds the drill, or records per-field errors and returns `None`.
    fn submit(&mut self, id: u32) -> Option<Drill> {
        if let Err(errors) = Self::validator().validate(|field| self.value(field)) {
            self.errors = errors;
            return None;
        }
        let sport = self.sport?;
        let minutes = self.minutes.trim().parse::<u32>().ok()?;

        let or_any = |value: &str| {
            let value = value.trim();
            if value.is_empty() {
                "Any".to_string()
            } else {
                value.to_string()
            }
        };

        Some(Drill {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            minutes,
            sport,
            kind: self.kind.unwrap_or(DrillKind::Technical),
            difficulty: self.difficulty.unwrap_or(Difficulty::Beginner),
            players: or_any(&self.players),
            space: or_any(&self.space),
            instructions: String::new(),
            equipment: String::new(),
            author: OWN_AUTHOR.to_string(),
            favorite: false,
        })
    }
}

#[derive(Debug)]
pub struct State {
    drills: Vec<Drill>,
    engine: ListFilterEngine,
    sport: Choice<Sport>,
    kind: Choice<DrillKind>,
    difficulty: Choice<Difficulty>,
    duration: Choice<DurationBucket>,
    category: Category,
    search: String,
    debouncer: Debouncer,
    load: LoadState,
    selected: Option<u32>,
    form: DrillForm,
}

impl State {
    #[must_use]
    pub fn new(search_debounce: Duration) -> Self {
        Self {
            drills: Vec::new(),
            engine: ListFilterEngine::new(),
            sport: Choice::Any,
            kind: Choice::Any,
            difficulty: Choice::Any,
            duration: Choice::Any,
            category: Category::All,
            search: String::new(),
            debouncer: Debouncer::new(search_debounce),
            load: LoadState::new(),
            selected: None,
            form: DrillForm::default(),
        }
    }

    /// Starts the first load when the page is shown.
    pub fn enter(&mut self, ctx: &mut AppContext) -> Task<Message> {
        if self.load.needs_load() {
            self.load_drills(ctx)
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
    pub fn drills(&self) -> &[Drill] {
        &self.drills
    }

    #[must_use]
    pub fn engine(&self) -> &ListFilterEngine {
        &self.engine
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Drill> {
        let id = self.selected?;
        self.drills.iter().find(|drill| drill.id == id)
    }

    pub fn update(&mut self, message: Message, ctx: &mut AppContext) -> Task<Message> {
        match message {
            Message::DrillsLoaded(Ok(drills)) => {
                ctx.notifications
                    .success(format!("Loaded {} drills", drills.len()));
                self.drills = drills;
                self.engine.refresh(&self.drills);
                self.load.succeed();
                Task::none()
            }
            Message::DrillsLoaded(Err(error)) => {
                ctx.report_data_error("drills", &error);
                self.load.fail(error);
                Task::none()
            }
            Message::SportSelected(choice) => {
                self.sport = choice;
                self.apply_filters();
                Task::none()
            }
            Message::KindSelected(choice) => {
                self.kind = choice;
                self.apply_filters();
                Task::none()
            }
            Message::DifficultySelected(choice) => {
                self.difficulty = choice;
                self.apply_filters();
                Task::none()
            }
            Message::DurationSelected(choice) => {
                self.duration = choice;
                self.apply_filters();
                Task::none()
            }
            Message::CategorySelected(category) => {
                self.category = category;
                self.apply_filters();
                Task::none()
            }
            Message::SearchChanged(value) => {
                self.search = value;
                ctx.modals.note_focus(SEARCH);
                self.debouncer.schedule(Message::SearchElapsed)
            }
            Message::SearchElapsed(token) => {
                if self.debouncer.fire(token) {
                    self.engine.apply_search(&self.drills, &self.search);
                }
                Task::none()
            }
            Message::ClearFilters => {
                self.sport = Choice::Any;
                self.kind = Choice::Any;
                self.difficulty = Choice::Any;
                self.duration = Choice::Any;
                self.category = Category::All;
                self.search.clear();
                self.debouncer.cancel();
                self.engine.clear(&self.drills);
                Task::none()
            }
            Message::ToggleFavorite(id) => {
                if let Some(drill) = self.drills.iter_mut().find(|drill| drill.id == id) {
                    drill.favorite = !drill.favorite;
                    if drill.favorite {
                        ctx.notifications.success("Added to favorites");
                    } else {
                        ctx.notifications.info("Removed from favorites");
                    }
                    // Favorites chip depends on the flag.
                    self.engine.refresh(&self.drills);
                }
                Task::none()
            }
            Message::Assign(id) => {
                if self.drills.iter().any(|drill| drill.id == id) {
                    ctx.notifications
                        .success("Drill assigned to next training session");
                }
                Task::none()
            }
            Message::ShowDetails(id) => {
                self.selected = Some(id);
                ctx.modals.open(ModalId::DrillDetails, Vec::new());
                ctx.modals.focus_task()
            }
            Message::CloseDetails => {
                ctx.modals.close(ModalId::DrillDetails, Instant::now());
                ctx.modals.focus_task()
            }
            Message::OpenNewDrill => self.open_new_drill(ctx),
            Message::FormChanged(field) => {
                let focus = match &field {
                    FormField::Title(_) => Some(TITLE_INPUT),
                    FormField::Minutes(_) => Some(MINUTES_INPUT),
                    FormField::Players(_) => Some(PLAYERS_INPUT),
                    FormField::Space(_) => Some(SPACE_INPUT),
                    FormField::Description(_) => Some(DESCRIPTION_INPUT),
                    _ => None,
                };
                if let Some(id) = focus {
                    ctx.modals.note_focus(id);
                }
                self.form.set(field);
                Task::none()
            }
            Message::SubmitNewDrill => self.submit_new_drill(ctx),
            Message::CancelNewDrill => {
                ctx.modals.close(ModalId::NewDrill, Instant::now());
                ctx.modals.focus_task()
            }
            Message::Retry => self.load_drills(ctx),
            Message::ToggleErrorDetails => {
                self.load.toggle_details();
                Task::none()
            }
        }
    }

    /// Opens the "New drill" form with empty fields.
    pub fn open_new_drill(&mut self, ctx: &mut AppContext) -> Task<Message> {
        if ctx.modals.is_open(ModalId::NewDrill) {
            return Task::none();
        }
        self.form = DrillForm::default();
        ctx.modals.open(
            ModalId::NewDrill,
            vec![
                TITLE_INPUT,
                MINUTES_INPUT,
                PLAYERS_INPUT,
                SPACE_INPUT,
                DESCRIPTION_INPUT,
            ],
        );
        ctx.modals.focus_task()
    }

    fn submit_new_drill(&mut self, ctx: &mut AppContext) -> Task<Message> {
        let id = self.drills.iter().map(|drill| drill.id).max().unwrap_or(0) + 1;
        match self.form.submit(id) {
            Some(drill) => {
                tracing::info!(id, title = %drill.title, "drill created");
                self.drills.insert(0, drill);
                self.engine.refresh(&self.drills);
                self.form = DrillForm::default();
                ctx.notifications.success("New drill created successfully!");
                ctx.modals.close(ModalId::NewDrill, Instant::now());
                ctx.modals.focus_task()
            }
            None => {
                ctx.notifications.error(SUMMARY_MESSAGE);
                Task::none()
            }
        }
    }

    fn load_drills(&mut self, ctx: &AppContext) -> Task<Message> {
        if !self.load.begin(Instant::now()) {
            return Task::none();
        }
        Task::perform(ctx.data.drills(), Message::DrillsLoaded)
    }

    fn apply_filters(&mut self) {
        let criteria = vec![
            FilterCriterion::has_tag("sport", self.sport.criterion_value()),
            FilterCriterion::has_tag("type", self.kind.criterion_value()),
            FilterCriterion::has_tag("difficulty", self.difficulty.criterion_value()),
            FilterCriterion::duration("duration", self.duration.criterion_value()),
            self.category.criterion(),
        ];
        self.engine.apply_filters(&self.drills, criteria);
    }

    fn filters_active(&self) -> bool {
        self.sport != Choice::Any
            || self.kind != Choice::Any
            || self.difficulty != Choice::Any
            || self.duration != Choice::Any
            || self.category != Category::All
            || !self.search.is_empty()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let new_drill = button(Text::new("+ New drill").size(typography::BODY))
            .on_press(Message::OpenNewDrill)
            .style(styles::button::primary);
        let header = page::header(
            "Drill Library",
            Some("Browse, filter and plan training drills".to_string()),
            vec![new_drill.into()],
        );

        let body: Element<'_, Message> = if self.load.is_loading() {
            page::loading(self.load.elapsed(), "Loading drills…")
        } else if let Some(error) = self.load.error() {
            page::load_error(
                "the drill library",
                error,
                self.load.details_visible(),
                Message::Retry,
                Message::ToggleErrorDetails,
            )
        } else {
            self.list_view()
        };

        let chips = Category::chips().fold(Row::new().spacing(spacing::XS), |row, category| {
            row.push(
                button(Text::new(category.to_string()).size(typography::BODY_SM))
                    .on_press(Message::CategorySelected(category))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::chip(self.category == category)),
            )
        });

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(filter_bar::bar(vec![
                filter_bar::search_box(SEARCH, "Search drills…", &self.search, Message::SearchChanged),
                filter_bar::picker(self.sport, Message::SportSelected),
                filter_bar::picker(self.kind, Message::KindSelected),
                filter_bar::picker(self.difficulty, Message::DifficultySelected),
                filter_bar::picker(self.duration, Message::DurationSelected),
                filter_bar::clear_button(self.filters_active(), Message::ClearFilters),
            ]))
            .push(chips)
            .push(body)
            .into()
    }

    fn list_view(&self) -> Element<'_, Message> {
        let mut list = Column::new().spacing(spacing::SM).push(filter_bar::summary(
            self.engine.visible_count(),
            self.drills.len(),
            "drills",
        ));

        if self.engine.is_empty_result() && !self.drills.is_empty() {
            list = list.push(page::empty("No drills match the current filters."));
        }

        for (_, drill, visibility) in self.engine.visible_items(&self.drills) {
            list = list.push(page::card(drill_card(drill), visibility.highlighted));
        }

        scrollable(list).height(Length::Fill).into()
    }

    /// Dialog content for `modal`, if this page owns it.
    pub fn modal_view(&self, modal: ModalId, alpha: f32) -> Option<Element<'_, Message>> {
        match modal {
            ModalId::DrillDetails => {
                let drill = self.selected()?;
                Some(modal::view::dialog(
                    drill.title.as_str(),
                    drill_details(drill),
                    Message::CloseDetails,
                    alpha,
                ))
            }
            ModalId::NewDrill => Some(modal::view::dialog(
                "New drill",
                self.form_view(),
                Message::CancelNewDrill,
                alpha,
            )),
            _ => None,
        }
    }

    fn form_view(&self) -> Element<'_, Message> {
        let form = &self.form;
        let errors = &form.errors;

        let sport = pick_list(Sport::ALL, form.sport, |sport| {
            Message::FormChanged(FormField::Sport(sport))
        })
        .placeholder("Select sport");

        let kind_and_level = Row::new()
            .spacing(spacing::SM)
            .push(
                pick_list(DrillKind::ALL, form.kind, |kind| {
                    Message::FormChanged(FormField::Kind(kind))
                })
                .placeholder("Type"),
            )
            .push(
                pick_list(Difficulty::ALL, form.difficulty, |difficulty| {
                    Message::FormChanged(FormField::Difficulty(difficulty))
                })
                .placeholder("Difficulty"),
            );

        let buttons = Row::new()
            .spacing(spacing::SM)
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new("Cancel").size(typography::BODY))
                    .on_press(Message::CancelNewDrill)
                    .style(styles::button::unselected),
            )
            .push(
                button(Text::new("Create drill").size(typography::BODY))
                    .on_press(Message::SubmitNewDrill)
                    .style(styles::button::primary),
            );

        Column::new()
            .spacing(spacing::SM)
            .push(labeled(
                "Title *",
                form_input(TITLE_INPUT, "e.g. Rondo 4v2", &form.title, FormField::Title),
                errors.get("title"),
            ))
            .push(labeled(
                "Duration (minutes) *",
                form_input(MINUTES_INPUT, "20", &form.minutes, FormField::Minutes),
                errors.get("minutes"),
            ))
            .push(labeled("Sport *", sport, errors.get("sport")))
            .push(kind_and_level)
            .push(form_input(
                PLAYERS_INPUT,
                "Players, e.g. 8-12",
                &form.players,
                FormField::Players,
            ))
            .push(form_input(
                SPACE_INPUT,
                "Space, e.g. Half Pitch",
                &form.space,
                FormField::Space,
            ))
            .push(form_input(
                DESCRIPTION_INPUT,
                "Description",
                &form.description,
                FormField::Description,
            ))
            .push(buttons)
            .into()
    }
}

fn form_input<'a>(
    id: FocusId,
    placeholder: &'a str,
    value: &'a str,
    wrap: fn(String) -> FormField,
) -> TextInput<'a, Message> {
    text_input(placeholder, value)
        .id(id.widget_id())
        .on_input(move |value| Message::FormChanged(wrap(value)))
        .on_submit(Message::SubmitNewDrill)
        .padding(spacing::XS)
        .size(typography::BODY)
}

/// Form control with its label and, after a failed submit, its error.
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

fn tag_row<'a>(drill: &Drill) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .push(page::badge(drill.sport.label(), palette::PRIMARY_500))
        .push(page::badge(drill.kind.label(), palette::INFO_500))
        .push(page::badge(
            drill.difficulty.label(),
            theme::difficulty_color(drill.difficulty),
        ))
}

fn drill_card(drill: &Drill) -> Element<'_, Message> {
    let favorite_label = if drill.favorite { "♥" } else { "♡" };
    let title_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(drill.title.as_str()).size(typography::TITLE_SM))
        .push(page::muted(format!("{} min", drill.minutes)))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(favorite_label).size(typography::TITLE_SM))
                .on_press(Message::ToggleFavorite(drill.id))
                .style(styles::button::ghost),
        );

    let stats = Row::new()
        .spacing(spacing::MD)
        .push(page::muted(drill.players.as_str()))
        .push(page::muted(drill.space.as_str()))
        .push(page::muted(drill.author.as_str()));

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new("View").size(typography::BODY_SM))
                .on_press(Message::ShowDetails(drill.id))
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new("Assign").size(typography::BODY_SM))
                .on_press(Message::Assign(drill.id))
                .style(styles::button::unselected),
        );

    Column::new()
        .spacing(spacing::XS)
        .push(title_row)
        .push(tag_row(drill))
        .push(Text::new(drill.description.as_str()).size(typography::BODY))
        .push(stats)
        .push(actions)
        .into()
}

fn drill_details(drill: &Drill) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(tag_row(drill))
        .push(Text::new(drill.description.as_str()).size(typography::BODY))
        .push(page::detail_row("Duration", format!("{} min", drill.minutes)))
        .push(page::detail_row("Players", drill.players.as_str()))
        .push(page::detail_row("Space", drill.space.as_str()))
        .push(page::detail_row("Author", drill.author.as_str()));

    if !drill.instructions.is_empty() {
        column = column.push(page::detail_row("Instructions", drill.instructions.as_str()));
    }
    if !drill.equipment.is_empty() {
        column = column.push(page::detail_row("Equipment", drill.equipment.as_str()));
    }
    column.into()
}
