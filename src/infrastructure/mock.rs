// SPDX-License-Identifier: MPL-2.0
//! Fixture-backed data source with a fixed response delay.
//!
//! Every call sleeps for the configured delay, then returns the literal
//! records from [`fixtures`](super::fixtures). By default calls always
//! succeed; tests install a [`FailureHook`] to force
//! [`DataError::Unavailable`].

use super::fixtures;
use crate::application::port::{DataError, DataResult, TeamDataSource};
use crate::domain::team::{
    AttendanceRecord, AttendanceSubmission, Checkup, Drill, MedicalRecord, Player, Team,
    TrainingSession,
};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::sync::Arc;
use std::time::Duration;

/// Operation a [`FailureHook`] is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Teams,
    Roster,
    Drills,
    Sessions,
    AttendanceHistory,
    SaveAttendance,
    MedicalRecords,
    Checkups,
}

/// Decides whether a call should fail. Returns `true` to fail.
pub type FailureHook = Arc<dyn Fn(Operation) -> bool + Send + Sync>;

/// Mock adapter serving fixture data.
#[derive(Clone)]
pub struct MockDataSource {
    delay: Duration,
    failure_hook: Option<FailureHook>,
}

impl std::fmt::Debug for MockDataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockDataSource")
            .field("delay", &self.delay)
            .field("failure_hook", &self.failure_hook.is_some())
            .finish()
    }
}

impl MockDataSource {
    /// Creates a source that answers after `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure_hook: None,
        }
    }

    /// Installs a hook consulted before every response.
    #[must_use]
    pub fn with_failure_hook(mut self, hook: FailureHook) -> Self {
        self.failure_hook = Some(hook);
        self
    }

    /// Makes every call fail.
    #[must_use]
    pub fn always_failing(self) -> Self {
        self.with_failure_hook(Arc::new(|_| true))
    }

    fn respond<T, F>(&self, operation: Operation, produce: F) -> BoxFuture<'static, DataResult<T>>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let delay = self.delay;
        let hook = self.failure_hook.clone();
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if hook.is_some_and(|should_fail| should_fail(operation)) {
                tracing::debug!(?operation, "mock data source failing on request");
                return Err(DataError::Unavailable);
            }
            Ok(produce())
        }
        .boxed()
    }
}

impl TeamDataSource for MockDataSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn teams(&self) -> BoxFuture<'static, DataResult<Vec<Team>>> {
        self.respond(Operation::Teams, fixtures::teams)
    }

    fn roster(&self, team: &Team) -> BoxFuture<'static, DataResult<Vec<Player>>> {
        let team_id = team.id.clone();
        self.respond(Operation::Roster, move || fixtures::roster(&team_id))
    }

    fn drills(&self) -> BoxFuture<'static, DataResult<Vec<Drill>>> {
        self.respond(Operation::Drills, fixtures::drills)
    }

    fn sessions(&self) -> BoxFuture<'static, DataResult<Vec<TrainingSession>>> {
        self.respond(Operation::Sessions, fixtures::sessions)
    }

    fn attendance_history(
        &self,
        team: &Team,
    ) -> BoxFuture<'static, DataResult<Vec<AttendanceRecord>>> {
        let team_id = team.id.clone();
        self.respond(Operation::AttendanceHistory, move || {
            fixtures::attendance_history(&team_id)
        })
    }

    fn save_attendance(
        &self,
        submission: AttendanceSubmission,
    ) -> BoxFuture<'static, DataResult<()>> {
        self.respond(Operation::SaveAttendance, move || {
            tracing::debug!(
                team = %submission.team_id,
                entries = submission.entries.len(),
                "mock stored attendance"
            );
        })
    }

    fn medical_records(&self) -> BoxFuture<'static, DataResult<Vec<MedicalRecord>>> {
        self.respond(Operation::MedicalRecords, fixtures::medical_records)
    }

    fn checkups(&self) -> BoxFuture<'static, DataResult<Vec<Checkup>>> {
        self.respond(Operation::Checkups, fixtures::checkups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn senior() -> Team {
        Team {
            id: fixtures::DEFAULT_TEAM_ID.to_string(),
            name: "Senior Squad".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn responds_after_configured_delay() {
        let source = MockDataSource::new(Duration::from_millis(800));
        let started = tokio::time::Instant::now();
        let drills = source.drills().await.expect("mock succeeds by default");
        assert!(!drills.is_empty());
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test]
    async fn zero_delay_returns_immediately() {
        let source = MockDataSource::new(Duration::ZERO);
        let started = Instant::now();
        let roster = source.roster(&senior()).await.expect("roster");
        assert_eq!(roster, fixtures::roster(fixtures::DEFAULT_TEAM_ID));
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn failure_hook_forces_unavailable() {
        let source = MockDataSource::new(Duration::ZERO).always_failing();
        assert_eq!(source.sessions().await, Err(DataError::Unavailable));
    }

    #[tokio::test]
    async fn failure_hook_can_target_one_operation() {
        let source = MockDataSource::new(Duration::ZERO)
            .with_failure_hook(Arc::new(|op| op == Operation::Roster));
        assert!(source.roster(&senior()).await.is_err());
        assert!(source.drills().await.is_ok());
    }

    #[tokio::test]
    async fn save_can_fail_while_history_loads() {
        use crate::domain::team::AttendanceSheet;

        let source = MockDataSource::new(Duration::ZERO)
            .with_failure_hook(Arc::new(|op| op == Operation::SaveAttendance));
        let history = source.attendance_history(&senior()).await.expect("history");
        assert_eq!(history, fixtures::attendance_history(fixtures::DEFAULT_TEAM_ID));

        let submission = AttendanceSubmission {
            team_id: senior().id,
            session: "Evening Training".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"),
            entries: AttendanceSheet::new([1, 2]).entries(),
        };
        assert_eq!(
            source.save_attendance(submission).await,
            Err(DataError::Unavailable)
        );
    }
}
