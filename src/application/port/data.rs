// SPDX-License-Identifier: MPL-2.0
//! Team data port definition.
//!
//! This module defines the [`TeamDataSource`] trait through which pages load
//! rosters, the drill library, the training schedule, attendance history and
//! medical records.
//!
//! # Design Notes
//!
//! - Methods return boxed `Send` futures so callers can hand them to
//!   `iced::Task::perform` without knowing the adapter
//! - The trait is `Send + Sync`; the application holds it as
//!   `Arc<dyn TeamDataSource>`
//! - Adapters never panic; every failure surfaces as a [`DataError`]

use crate::domain::team::{
    AttendanceRecord, AttendanceSubmission, Checkup, Drill, MedicalRecord, Player, Team,
    TrainingSession,
};
use futures_util::future::BoxFuture;
use thiserror::Error;

// =============================================================================
// DataError
// =============================================================================

/// Errors that can occur while loading team data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The source is unreachable or refused to answer.
    #[error("data source unavailable")]
    Unavailable,

    /// The server answered with a non-success status code.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The request could not be sent or the response could not be read.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Result alias for data-port operations.
pub type DataResult<T> = std::result::Result<T, DataError>;

// =============================================================================
// TeamDataSource
// =============================================================================

/// Asynchronous access to team records.
///
/// # Example
///
/// ```ignore
/// use squad_desk::application::port::TeamDataSource;
///
/// async fn count_players(source: &dyn TeamDataSource, team: &Team) -> usize {
///     source.roster(team).await.map(|p| p.len()).unwrap_or(0)
/// }
/// ```
pub trait TeamDataSource: Send + Sync {
    /// Short adapter name used in logs ("mock", "http").
    fn name(&self) -> &'static str;

    /// Teams the coach can switch between.
    fn teams(&self) -> BoxFuture<'static, DataResult<Vec<Team>>>;

    /// Players of one team, in roster order.
    fn roster(&self, team: &Team) -> BoxFuture<'static, DataResult<Vec<Player>>>;

    /// The shared drill library.
    fn drills(&self) -> BoxFuture<'static, DataResult<Vec<Drill>>>;

    /// Upcoming and past training sessions.
    fn sessions(&self) -> BoxFuture<'static, DataResult<Vec<TrainingSession>>>;

    /// Saved attendance of past sessions, newest first.
    fn attendance_history(
        &self,
        team: &Team,
    ) -> BoxFuture<'static, DataResult<Vec<AttendanceRecord>>>;

    /// Stores the marks of one session.
    fn save_attendance(
        &self,
        submission: AttendanceSubmission,
    ) -> BoxFuture<'static, DataResult<()>>;

    /// Medical files of every player across teams.
    fn medical_records(&self) -> BoxFuture<'static, DataResult<Vec<MedicalRecord>>>;

    /// Planned and past checkups.
    fn checkups(&self) -> BoxFuture<'static, DataResult<Vec<Checkup>>>;
}
