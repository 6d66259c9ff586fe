// SPDX-License-Identifier: MPL-2.0
//! Players page: team roster with position and status filters.
//!
//! The roster loads through the data port on first entry. Switching teams
//! reloads it; results for a team that is no longer selected are dropped.

use crate::app::context::AppContext;
use crate::application::port::DataResult;
use crate::domain::filter::{FilterCriterion, ListFilterEngine};
use crate::domain::team::{Player, PlayerStatus, Position, Team};
use crate::infrastructure::fixtures::DEFAULT_TEAM_ID;
use crate::ui::components::filter_bar::{self, Choice};
use crate::ui::components::page;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::modal::{self, FocusId, ModalId};
use crate::ui::state::{Debouncer, LoadState};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, pick_list, scrollable, Column, Row, Space, Text};
use iced::{alignment, Element, Length, Task};
use std::time::{Duration, Instant};

/// Search box of this page.
pub const SEARCH: FocusId = FocusId::new("players-search");

#[derive(Debug, Clone)]
pub enum Message {
    TeamsLoaded(DataResult<Vec<Team>>),
    RosterLoaded {
        team_id: String,
        result: DataResult<Vec<Player>>,
    },
    TeamSelected(Team),
    PositionSelected(Choice<Position>),
    StatusSelected(Choice<PlayerStatus>),
    SearchChanged(String),
    SearchElapsed(u64),
    ClearFilters,
    ShowDetails(u32),
    CloseDetails,
    Retry,
    ToggleErrorDetails,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user picked another team; carries its id.
    TeamChanged(String),
}

#[derive(Debug)]
pub struct State {
    teams: Vec<Team>,
    team: Option<Team>,
    preferred_team: Option<String>,
    players: Vec<Player>,
    engine: ListFilterEngine,
    position: Choice<Position>,
    status: Choice<PlayerStatus>,
    search: String,
    debouncer: Debouncer,
    load: LoadState,
    selected: Option<u32>,
}

impl State {
    /// `preferred_team` is the team restored from the last session.
    #[must_use]
    pub fn new(preferred_team: Option<String>, search_debounce: Duration) -> Self {
        Self {
            teams: Vec::new(),
            team: None,
            preferred_team,
            players: Vec::new(),
            engine: ListFilterEngine::new(),
            position: Choice::Any,
            status: Choice::Any,
            search: String::new(),
            debouncer: Debouncer::new(search_debounce),
            load: LoadState::new(),
            selected: None,
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
    pub fn engine(&self) -> &ListFilterEngine {
        &self.engine
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Player> {
        let id = self.selected?;
        self.players.iter().find(|player| player.id == id)
    }

    pub fn update(&mut self, message: Message, ctx: &mut AppContext) -> (Event, Task<Message>) {
        match message {
            Message::TeamsLoaded(Ok(teams)) => {
                self.teams = teams;
                let Some(team) = self.preferred(&self.teams).cloned() else {
                    self.load.succeed();
                    ctx.notifications.warning("No teams available");
                    return (Event::None, Task::none());
                };
                (Event::None, self.load_roster(team, ctx))
            }
            Message::TeamsLoaded(Err(error)) => {
                ctx.report_data_error("teams", &error);
                self.load.fail(error);
                (Event::None, Task::none())
            }
            Message::RosterLoaded { team_id, result } => {
                let Some(team) = self.team.as_ref().filter(|team| team.id == team_id) else {
                    tracing::debug!(%team_id, "dropping roster of deselected team");
                    return (Event::None, Task::none());
                };
                match result {
                    Ok(players) => {
                        let line = format!("Loaded {} players for {}", players.len(), team.name);
                        self.players = players;
                        self.engine.refresh(&self.players);
                        self.load.succeed();
                        ctx.notifications.success(line);
                    }
                    Err(error) => {
                        ctx.report_data_error("roster", &error);
                        self.load.fail(error);
                    }
                }
                (Event::None, Task::none())
            }
            Message::TeamSelected(team) => {
                if self.team.as_ref().is_some_and(|current| current.id == team.id) {
                    return (Event::None, Task::none());
                }
                ctx.notifications.info(format!("Switched to {}", team.name));
                let event = Event::TeamChanged(team.id.clone());
                self.selected = None;
                (event, self.load_roster(team, ctx))
            }
            Message::PositionSelected(choice) => {
                self.position = choice;
                self.apply_filters();
                (Event::None, Task::none())
            }
            Message::StatusSelected(choice) => {
                self.status = choice;
                self.apply_filters();
                (Event::None, Task::none())
            }
            Message::SearchChanged(value) => {
                self.search = value;
                ctx.modals.note_focus(SEARCH);
                (Event::None, self.debouncer.schedule(Message::SearchElapsed))
            }
            Message::SearchElapsed(token) => {
                if self.debouncer.fire(token) {
                    self.engine.apply_search(&self.players, &self.search);
                }
                (Event::None, Task::none())
            }
            Message::ClearFilters => {
                self.position = Choice::Any;
                self.status = Choice::Any;
                self.search.clear();
                self.debouncer.cancel();
                self.engine.clear(&self.players);
                (Event::None, Task::none())
            }
            Message::ShowDetails(id) => {
                self.selected = Some(id);
                ctx.modals.open(ModalId::PlayerDetails, Vec::new());
                (Event::None, ctx.modals.focus_task())
            }
            Message::CloseDetails => {
                ctx.modals.close(ModalId::PlayerDetails, Instant::now());
                (Event::None, ctx.modals.focus_task())
            }
            Message::Retry => {
                let task = match self.team.clone() {
                    Some(team) => self.load_roster(team, ctx),
                    None => self.load_teams(ctx),
                };
                (Event::None, task)
            }
            Message::ToggleErrorDetails => {
                self.load.toggle_details();
                (Event::None, Task::none())
            }
        }
    }

    fn preferred<'t>(&self, teams: &'t [Team]) -> Option<&'t Team> {
        let by_id = |id: &str| teams.iter().find(|team| team.id == id);
        self.preferred_team
            .as_deref()
            .and_then(by_id)
            .or_else(|| by_id(DEFAULT_TEAM_ID))
            .or_else(|| teams.first())
    }

    fn load_teams(&mut self, ctx: &AppContext) -> Task<Message> {
        if !self.load.begin(Instant::now()) {
            return Task::none();
        }
        Task::perform(ctx.data.teams(), Message::TeamsLoaded)
    }

    fn load_roster(&mut self, team: Team, ctx: &AppContext) -> Task<Message> {
        if !self.load.is_loading() {
            self.load.begin(Instant::now());
        }
        let request = ctx.data.roster(&team);
        let team_id = team.id.clone();
        self.team = Some(team);
        Task::perform(request, move |result| Message::RosterLoaded { team_id, result })
    }

    fn apply_filters(&mut self) {
        let criteria = vec![
            FilterCriterion::contains("position", self.position.criterion_value()),
            FilterCriterion::equals("status", self.status.criterion_value()),
        ];
        self.engine.apply_filters(&self.players, criteria);
    }

    fn filters_active(&self) -> bool {
        self.position != Choice::Any || self.status != Choice::Any || !self.search.is_empty()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let team_picker = pick_list(self.teams.as_slice(), self.team.clone(), Message::TeamSelected)
            .placeholder("Select team")
            .text_size(typography::BODY);

        let subtitle = self.team.as_ref().map(|team| format!("{team} roster"));
        let header = page::header("Players", subtitle, vec![team_picker.into()]);

        let body: Element<'_, Message> = if self.load.is_loading() {
            page::loading(self.load.elapsed(), "Loading roster…")
        } else if let Some(error) = self.load.error() {
            page::load_error(
                "the roster",
                error,
                self.load.details_visible(),
                Message::Retry,
                Message::ToggleErrorDetails,
            )
        } else {
            self.list_view()
        };

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(filter_bar::bar(vec![
                filter_bar::search_box(SEARCH, "Search players…", &self.search, Message::SearchChanged),
                filter_bar::picker(self.position, Message::PositionSelected),
                filter_bar::picker(self.status, Message::StatusSelected),
                filter_bar::clear_button(self.filters_active(), Message::ClearFilters),
            ]))
            .push(body)
            .into()
    }

    fn list_view(&self) -> Element<'_, Message> {
        let mut list = Column::new().spacing(spacing::XS).push(filter_bar::summary(
            self.engine.visible_count(),
            self.players.len(),
            "players",
        ));

        if self.engine.is_empty_result() && !self.players.is_empty() {
            list = list.push(page::empty("No players match the current filters."));
        }

        for (_, player, visibility) in self.engine.visible_items(&self.players) {
            list = list.push(page::card(player_row(player), visibility.highlighted));
        }

        scrollable(list).height(Length::Fill).into()
    }

    /// Dialog content for `modal`, if this page owns it.
    pub fn modal_view(&self, modal: ModalId, alpha: f32) -> Option<Element<'_, Message>> {
        if modal != ModalId::PlayerDetails {
            return None;
        }
        let player = self.selected()?;

        let body = Column::new()
            .spacing(spacing::XS)
            .push(page::detail_row("Number", format!("#{}", player.number)))
            .push(page::detail_row("Position", player.position.label()))
            .push(page::detail_row("Age", player.age.to_string()))
            .push(page::detail_row("Status", player.status.label()))
            .push(page::detail_row(
                "Attendance",
                format!("{}%", player.attendance_percent),
            ));

        Some(modal::view::dialog(
            player.name.as_str(),
            body,
            Message::CloseDetails,
            alpha,
        ))
    }
}

fn player_row(player: &Player) -> Element<'_, Message> {
    let identity = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(player.name.as_str()).size(typography::BODY_LG))
        .push(page::muted(player.position.label()));

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(format!("#{}", player.number)).size(typography::TITLE_SM))
        .push(identity)
        .push(Space::new().width(Length::Fill))
        .push(page::muted(format!("{}% attendance", player.attendance_percent)))
        .push(page::badge(
            player.status.label(),
            theme::player_status_color(player.status),
        ))
        .push(
            button(Text::new("Details").size(typography::BODY))
                .on_press(Message::ShowDetails(player.id))
                .style(styles::button::ghost),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::infrastructure::{fixtures, MockDataSource};
    use crate::ui::notifications::Severity;
    use std::sync::Arc;

    fn context() -> AppContext {
        AppContext::new(
            Config::default(),
            Arc::new(MockDataSource::new(Duration::ZERO)),
        )
    }

    fn team(id: &str) -> Team {
        fixtures::teams()
            .into_iter()
            .find(|team| team.id == id)
            .expect("fixture team")
    }

    fn loaded(ctx: &mut AppContext) -> State {
        let mut state = State::new(None, Duration::from_millis(300));
        let _ = state.enter(ctx);
        let _ = state.update(Message::TeamsLoaded(Ok(fixtures::teams())), ctx);
        let _ = state.update(
            Message::RosterLoaded {
                team_id: DEFAULT_TEAM_ID.to_string(),
                result: Ok(fixtures::roster(DEFAULT_TEAM_ID)),
            },
            ctx,
        );
        state
    }

    #[test]
    fn enter_loads_once() {
        let mut ctx = context();
        let mut state = State::new(None, Duration::from_millis(300));
        let _ = state.enter(&mut ctx);
        assert!(state.is_loading());
        let _ = state.enter(&mut ctx);
        assert!(state.is_loading());
    }

    #[test]
    fn teams_loaded_picks_preferred_then_default_team() {
        let mut ctx = context();
        let mut state = State::new(Some("u19".to_string()), Duration::ZERO);
        let _ = state.enter(&mut ctx);
        let _ = state.update(Message::TeamsLoaded(Ok(fixtures::teams())), &mut ctx);
        assert_eq!(state.team().map(|t| t.id.as_str()), Some("u19"));

        let mut state = State::new(Some("gone".to_string()), Duration::ZERO);
        let _ = state.enter(&mut ctx);
        let _ = state.update(Message::TeamsLoaded(Ok(fixtures::teams())), &mut ctx);
        assert_eq!(state.team().map(|t| t.id.as_str()), Some(DEFAULT_TEAM_ID));
    }

    #[test]
    fn roster_load_emits_success_toast() {
        let mut ctx = context();
        let state = loaded(&mut ctx);
        assert!(!state.is_loading());
        assert_eq!(state.players().len(), fixtures::roster(DEFAULT_TEAM_ID).len());
        assert!(ctx
            .notifications
            .visible()
            .any(|n| n.severity() == Severity::Success));
    }

    #[test]
    fn stale_roster_is_ignored() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let (event, _) = state.update(Message::TeamSelected(team("u19")), &mut ctx);
        assert_eq!(event, Event::TeamChanged("u19".to_string()));

        let _ = state.update(
            Message::RosterLoaded {
                team_id: DEFAULT_TEAM_ID.to_string(),
                result: Ok(Vec::new()),
            },
            &mut ctx,
        );
        assert!(state.is_loading(), "result of the old team must not finish the load");
    }

    #[test]
    fn team_switch_announces_new_team() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        ctx.notifications.clear();

        let _ = state.update(Message::TeamSelected(team("u17")), &mut ctx);
        let toast = ctx.notifications.visible().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Info);
        assert_eq!(toast.message(), "Switched to Under 17");
    }

    #[test]
    fn reselecting_current_team_does_nothing() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let (event, _) = state.update(Message::TeamSelected(team(DEFAULT_TEAM_ID)), &mut ctx);
        assert_eq!(event, Event::None);
        assert!(!state.is_loading());
    }

    #[test]
    fn status_filter_matches_exactly() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let _ = state.update(Message::StatusSelected(Choice::Only(PlayerStatus::Injured)), &mut ctx);

        let visible: Vec<_> = state
            .engine()
            .visible_items(state.players())
            .map(|(_, p, _)| p.status)
            .collect();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|s| *s == PlayerStatus::Injured));
    }

    #[test]
    fn search_runs_only_for_latest_keystroke() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let first = state.players()[0].name.clone();

        let _ = state.update(Message::SearchChanged("zz".to_string()), &mut ctx);
        let _ = state.update(Message::SearchChanged(first.clone()), &mut ctx);
        // Token 1 belongs to the superseded keystroke.
        let _ = state.update(Message::SearchElapsed(1), &mut ctx);
        assert!(state.engine().search_term().is_empty());

        let _ = state.update(Message::SearchElapsed(2), &mut ctx);
        assert_eq!(state.engine().search_term(), first.to_lowercase());
        assert!(state.engine().visibility(0).highlighted);
    }

    #[test]
    fn clear_filters_shows_everyone() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let _ = state.update(Message::PositionSelected(Choice::Only(Position::Goalkeeper)), &mut ctx);
        assert!(state.engine().visible_count() < state.players().len());

        let _ = state.update(Message::ClearFilters, &mut ctx);
        let _ = state.update(Message::ClearFilters, &mut ctx);
        assert_eq!(state.engine().visible_count(), state.players().len());
        assert!(!state.filters_active());
    }

    #[test]
    fn details_open_and_close_the_modal() {
        let mut ctx = context();
        let mut state = loaded(&mut ctx);
        let id = state.players()[1].id;

        let _ = state.update(Message::ShowDetails(id), &mut ctx);
        assert!(ctx.modals.is_open(ModalId::PlayerDetails));
        assert_eq!(state.selected().map(|p| p.id), Some(id));
        assert!(state.modal_view(ModalId::PlayerDetails, 1.0).is_some());
        assert!(state.modal_view(ModalId::NewDrill, 1.0).is_none());

        let _ = state.update(Message::CloseDetails, &mut ctx);
        assert!(!ctx.modals.is_open(ModalId::PlayerDetails));
    }

    #[test]
    fn failed_load_offers_retry() {
        let mut ctx = context();
        let mut state = State::new(None, Duration::ZERO);
        let _ = state.enter(&mut ctx);
        let _ = state.update(
            Message::TeamsLoaded(Err(crate::application::port::DataError::Unavailable)),
            &mut ctx,
        );
        assert!(!state.is_loading());
        assert!(ctx
            .notifications
            .visible()
            .any(|n| n.severity() == Severity::Error));

        let _ = state.update(Message::Retry, &mut ctx);
        assert!(state.is_loading());
    }
}
