// SPDX-License-Identifier: MPL-2.0
//! REST adapter for the team data port.
//!
//! Endpoints, relative to the configured base URL:
//!
//! | Operation            | Request                            |
//! |----------------------|------------------------------------|
//! | `teams`              | `GET {base}/teams`                 |
//! | `roster`             | `GET {base}/teams/{id}/players`    |
//! | `drills`             | `GET {base}/drills`                |
//! | `sessions`           | `GET {base}/sessions`              |
//! | `attendance_history` | `GET {base}/teams/{id}/attendance` |
//! | `save_attendance`    | `POST {base}/teams/{id}/attendance`|
//! | `medical_records`    | `GET {base}/medical/players`       |
//! | `checkups`           | `GET {base}/medical/checkups`      |
//!
//! Bodies are JSON decoded with serde. Team ids are percent-encoded.

use crate::application::port::{DataError, DataResult, TeamDataSource};
use crate::domain::team::{
    AttendanceRecord, AttendanceSubmission, Checkup, Drill, MedicalRecord, Player, Team,
    TrainingSession,
};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("SquadDesk/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP adapter backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: reqwest::Client,
    base_url: String,
}

/// Path of a per-team resource, e.g. `/teams/u19/players`.
fn team_path(team_id: &str, resource: &str) -> String {
    format!("/teams/{}/{resource}", urlencoding::encode(team_id))
}

fn transport(error: reqwest::Error) -> DataError {
    DataError::Transport(error.to_string())
}

/// Maps a non-success status to [`DataError::Status`].
fn check_status(url: &str, response: reqwest::Response) -> DataResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    tracing::warn!(%url, status = status.as_u16(), "data request rejected");
    Err(DataError::Status(status.as_u16()))
}

impl HttpDataSource {
    /// Builds the adapter. Fails only when the TLS backend cannot initialize.
    pub fn new(base_url: impl Into<String>) -> DataResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(transport)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path starting with `/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get_json<T>(&self, path: String) -> BoxFuture<'static, DataResult<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.client.clone();
        let url = self.endpoint(&path);
        async move {
            let response = client.get(&url).send().await.map_err(transport)?;
            check_status(&url, response)?
                .json::<T>()
                .await
                .map_err(|e| DataError::Decode(e.to_string()))
        }
        .boxed()
    }

    fn post_json<B>(&self, path: String, body: B) -> BoxFuture<'static, DataResult<()>>
    where
        B: serde::Serialize + Send + 'static,
    {
        let client = self.client.clone();
        let url = self.endpoint(&path);
        async move {
            let response = client.post(&url).json(&body).send().await.map_err(transport)?;
            check_status(&url, response).map(drop)
        }
        .boxed()
    }
}

impl TeamDataSource for HttpDataSource {
    fn name(&self) -> &'static str {
        "http"
    }

    fn teams(&self) -> BoxFuture<'static, DataResult<Vec<Team>>> {
        self.get_json("/teams".to_string())
    }

    fn roster(&self, team: &Team) -> BoxFuture<'static, DataResult<Vec<Player>>> {
        self.get_json(team_path(&team.id, "players"))
    }

    fn drills(&self) -> BoxFuture<'static, DataResult<Vec<Drill>>> {
        self.get_json("/drills".to_string())
    }

    fn sessions(&self) -> BoxFuture<'static, DataResult<Vec<TrainingSession>>> {
        self.get_json("/sessions".to_string())
    }

    fn attendance_history(
        &self,
        team: &Team,
    ) -> BoxFuture<'static, DataResult<Vec<AttendanceRecord>>> {
        self.get_json(team_path(&team.id, "attendance"))
    }

    fn save_attendance(
        &self,
        submission: AttendanceSubmission,
    ) -> BoxFuture<'static, DataResult<()>> {
        let path = team_path(&submission.team_id, "attendance");
        self.post_json(path, submission)
    }

    fn medical_records(&self) -> BoxFuture<'static, DataResult<Vec<MedicalRecord>>> {
        self.get_json("/medical/players".to_string())
    }

    fn checkups(&self) -> BoxFuture<'static, DataResult<Vec<Checkup>>> {
        self.get_json("/medical/checkups".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let source = HttpDataSource::new("https://api.example.com/v1/").expect("client");
        assert_eq!(source.base_url(), "https://api.example.com/v1");
        assert_eq!(
            source.endpoint("/drills"),
            "https://api.example.com/v1/drills"
        );
    }

    #[test]
    fn team_ids_are_percent_encoded() {
        assert_eq!(team_path("u19", "players"), "/teams/u19/players");
        assert_eq!(
            team_path("first team/b", "attendance"),
            "/teams/first%20team%2Fb/attendance"
        );
    }
}
