// SPDX-License-Identifier: MPL-2.0
//! Medical records of players and their checkups.

use super::types::Position;
use crate::domain::filter::{FilterableItem, ItemMetadata};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// =============================================================================
// Player records
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicalStatus {
    Fit,
    Injured,
    Recovering,
}

labeled_enum!(MedicalStatus {
    Fit => "Fit",
    Injured => "Injured",
    Recovering => "Recovering",
});

impl MedicalStatus {
    /// Whether an injury description belongs with this status.
    #[must_use]
    pub fn needs_injury(self) -> bool {
        self == Self::Injured
    }

    /// Whether an expected recovery time belongs with this status.
    #[must_use]
    pub fn needs_recovery(self) -> bool {
        matches!(self, Self::Injured | Self::Recovering)
    }
}

/// One line of a player's medical history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalEvent {
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub note: String,
}

/// New status entered by the medical staff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: MedicalStatus,
    pub injury: String,
    pub recovery: String,
    pub notes: String,
}

/// Medical file of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub player_id: u32,
    pub name: String,
    /// Team display name.
    pub team: String,
    pub position: Position,
    pub status: MedicalStatus,
    #[serde(default)]
    pub injury: Option<String>,
    /// Expected recovery time, e.g. "2-3 weeks".
    #[serde(default)]
    pub recovery: Option<String>,
    pub last_checkup: NaiveDate,
    #[serde(default)]
    pub history: Vec<MedicalEvent>,
}

impl MedicalRecord {
    /// Applies a status change dated `on` and logs it in the history.
    ///
    /// Details that do not belong with the new status are cleared.
    pub fn apply(&mut self, update: StatusUpdate, on: NaiveDate) {
        let non_empty = |value: String| {
            let value = value.trim().to_string();
            (!value.is_empty()).then_some(value)
        };

        self.status = update.status;
        self.injury = if update.status.needs_injury() {
            non_empty(update.injury)
        } else {
            None
        };
        self.recovery = if update.status.needs_recovery() {
            non_empty(update.recovery)
        } else {
            None
        };
        self.history.push(MedicalEvent {
            date: on,
            title: format!("Status changed to {}", update.status),
            note: update.notes.trim().to_string(),
        });
    }
}

impl FilterableItem for MedicalRecord {
    fn metadata(&self) -> ItemMetadata {
        ItemMetadata::new()
            .text("team", self.team.clone())
            .text("status", self.status.token())
            .text("position", self.position.label())
            .searchable(self.name.clone())
            .searchable(self.team.clone())
    }
}

// =============================================================================
// Checkups
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckupKind {
    Routine,
    Injury,
    Fitness,
    PreMatch,
}

labeled_enum!(CheckupKind {
    Routine => "Routine",
    Injury => "Injury",
    Fitness => "Fitness",
    PreMatch => "Pre-match",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckupStatus {
    Scheduled,
    Completed,
    Cancelled,
}

labeled_enum!(CheckupStatus {
    Scheduled => "Scheduled",
    Completed => "Completed",
    Cancelled => "Cancelled",
});

/// A medical examination, planned or done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkup {
    pub id: u32,
    pub player_id: u32,
    pub player: String,
    pub team: String,
    pub kind: CheckupKind,
    pub status: CheckupStatus,
    pub at: NaiveDateTime,
    pub location: String,
    #[serde(default)]
    pub findings: String,
}

impl Checkup {
    /// A routine checkup for `record` at `at`.
    #[must_use]
    pub fn routine(id: u32, record: &MedicalRecord, at: NaiveDateTime) -> Self {
        Self {
            id,
            player_id: record.player_id,
            player: record.name.clone(),
            team: record.team.clone(),
            kind: CheckupKind::Routine,
            status: CheckupStatus::Scheduled,
            at,
            location: "Medical Room".to_string(),
            findings: String::new(),
        }
    }

    /// Cancels a scheduled checkup. Returns `false` when it already took
    /// place or was cancelled before.
    pub fn cancel(&mut self) -> bool {
        if self.status != CheckupStatus::Scheduled {
            return false;
        }
        self.status = CheckupStatus::Cancelled;
        true
    }
}

impl FilterableItem for Checkup {
    fn metadata(&self) -> ItemMetadata {
        ItemMetadata::new()
            .text("type", self.kind.token())
            .text("status", self.status.token())
            .text("team", self.team.clone())
            .searchable(self.player.clone())
            .searchable(self.team.clone())
            .searchable(self.location.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{FilterCriterion, ListFilterEngine};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).expect("valid date")
    }

    fn record(status: MedicalStatus) -> MedicalRecord {
        MedicalRecord {
            player_id: 3,
            name: "Youssef Nabil".to_string(),
            team: "Senior Squad".to_string(),
            position: Position::Defender,
            status,
            injury: Some("Hamstring strain".to_string()),
            recovery: Some("2 weeks".to_string()),
            last_checkup: date(1),
            history: Vec::new(),
        }
    }

    fn update(status: MedicalStatus) -> StatusUpdate {
        StatusUpdate {
            status,
            injury: "  Ankle sprain ".to_string(),
            recovery: "10 days".to_string(),
            notes: "Cleared by physio".to_string(),
        }
    }

    #[test]
    fn status_details_follow_status() {
        assert!(MedicalStatus::Injured.needs_injury());
        assert!(MedicalStatus::Injured.needs_recovery());
        assert!(!MedicalStatus::Recovering.needs_injury());
        assert!(MedicalStatus::Recovering.needs_recovery());
        assert!(!MedicalStatus::Fit.needs_recovery());
    }

    #[test]
    fn apply_keeps_only_relevant_details() {
        let mut rec = record(MedicalStatus::Fit);
        rec.apply(update(MedicalStatus::Injured), date(4));
        assert_eq!(rec.injury.as_deref(), Some("Ankle sprain"));
        assert_eq!(rec.recovery.as_deref(), Some("10 days"));

        rec.apply(update(MedicalStatus::Recovering), date(8));
        assert_eq!(rec.injury, None);
        assert_eq!(rec.recovery.as_deref(), Some("10 days"));

        rec.apply(update(MedicalStatus::Fit), date(12));
        assert_eq!(rec.recovery, None);
        assert_eq!(rec.status, MedicalStatus::Fit);
    }

    #[test]
    fn apply_logs_history_event() {
        let mut rec = record(MedicalStatus::Injured);
        rec.apply(update(MedicalStatus::Fit), date(12));
        let event = rec.history.last().expect("event");
        assert_eq!(event.date, date(12));
        assert_eq!(event.title, "Status changed to Fit");
        assert_eq!(event.note, "Cleared by physio");
    }

    #[test]
    fn only_scheduled_checkups_cancel() {
        let at = date(20).and_hms_opt(9, 0, 0).expect("valid time");
        let mut checkup = Checkup::routine(1, &record(MedicalStatus::Fit), at);
        assert!(checkup.cancel());
        assert_eq!(checkup.status, CheckupStatus::Cancelled);
        assert!(!checkup.cancel());
    }

    #[test]
    fn checkup_type_token_is_kebab_label() {
        assert_eq!(CheckupKind::PreMatch.token(), "pre-match");
    }

    #[test]
    fn records_filter_by_status_token() {
        let records = vec![record(MedicalStatus::Injured), record(MedicalStatus::Fit)];
        let mut engine = ListFilterEngine::new();
        engine.apply_filters(
            &records,
            vec![FilterCriterion::equals("status", MedicalStatus::Fit.token())],
        );
        assert_eq!(engine.visible_indices().collect::<Vec<_>>(), vec![1]);
    }
}
