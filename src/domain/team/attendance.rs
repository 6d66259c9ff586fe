// SPDX-License-Identifier: MPL-2.0
//! Session attendance: marks per player, live counts and saved records.
//!
//! An [`AttendanceSheet`] holds the marks of one session while the coach
//! fills it in. Players left unmarked count as absent once the sheet is
//! submitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Excused,
}

labeled_enum!(AttendanceStatus {
    Present => "Present",
    Late => "Late",
    Absent => "Absent",
    Excused => "Excused",
});

impl AttendanceStatus {
    /// Present and late players took part in the session.
    #[must_use]
    pub fn attended(self) -> bool {
        matches!(self, Self::Present | Self::Late)
    }
}

/// Rounded share of `part` in `total`, 0 when `total` is 0.
fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (part * 200 + total) / (total * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

// =============================================================================
// Live overview
// =============================================================================

/// Counts shown above the sheet while it is being filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceOverview {
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub excused: usize,
    pub unmarked: usize,
}

impl AttendanceOverview {
    /// Players with any mark.
    #[must_use]
    pub fn marked(&self) -> usize {
        self.present + self.late + self.absent + self.excused
    }

    /// Attended share of the marked players.
    #[must_use]
    pub fn rate_percent(&self) -> u8 {
        percent(self.present + self.late, self.marked())
    }
}

// =============================================================================
// Sheet
// =============================================================================

/// One mark sent to the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub player_id: u32,
    pub status: AttendanceStatus,
}

/// Payload of a save request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSubmission {
    pub team_id: String,
    pub session: String,
    pub date: NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

impl AttendanceSubmission {
    /// Totals of this submission as a history record.
    #[must_use]
    pub fn record(&self, id: u32) -> AttendanceRecord {
        let count = |status: AttendanceStatus| {
            self.entries
                .iter()
                .filter(|entry| entry.status == status)
                .count()
        };
        AttendanceRecord {
            id,
            session: self.session.clone(),
            date: self.date,
            present: count(AttendanceStatus::Present),
            late: count(AttendanceStatus::Late),
            absent: count(AttendanceStatus::Absent),
            excused: count(AttendanceStatus::Excused),
        }
    }
}

/// Marks of one session, keyed by player id in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceSheet {
    order: Vec<u32>,
    marks: BTreeMap<u32, AttendanceStatus>,
}

impl AttendanceSheet {
    #[must_use]
    pub fn new(player_ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            order: player_ids.into_iter().collect(),
            marks: BTreeMap::new(),
        }
    }

    /// Marks a player. Returns `false` for ids not on the sheet.
    pub fn mark(&mut self, player_id: u32, status: AttendanceStatus) -> bool {
        if !self.order.contains(&player_id) {
            return false;
        }
        self.marks.insert(player_id, status);
        true
    }

    #[must_use]
    pub fn status(&self, player_id: u32) -> Option<AttendanceStatus> {
        self.marks.get(&player_id).copied()
    }

    /// Drops every mark.
    pub fn reset(&mut self) {
        self.marks.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn overview(&self) -> AttendanceOverview {
        self.order
            .iter()
            .fold(AttendanceOverview::default(), |mut overview, id| {
                match self.status(*id) {
                    Some(AttendanceStatus::Present) => overview.present += 1,
                    Some(AttendanceStatus::Late) => overview.late += 1,
                    Some(AttendanceStatus::Absent) => overview.absent += 1,
                    Some(AttendanceStatus::Excused) => overview.excused += 1,
                    None => overview.unmarked += 1,
                }
                overview
            })
    }

    /// Final marks in roster order; unmarked players become absent.
    #[must_use]
    pub fn entries(&self) -> Vec<AttendanceEntry> {
        self.order
            .iter()
            .map(|id| AttendanceEntry {
                player_id: *id,
                status: self.status(*id).unwrap_or(AttendanceStatus::Absent),
            })
            .collect()
    }
}

// =============================================================================
// History
// =============================================================================

/// Saved totals of a past session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: u32,
    pub session: String,
    pub date: NaiveDate,
    pub present: usize,
    #[serde(default)]
    pub late: usize,
    pub absent: usize,
    #[serde(default)]
    pub excused: usize,
}

impl AttendanceRecord {
    #[must_use]
    pub fn total(&self) -> usize {
        self.present + self.late + self.absent + self.excused
    }

    #[must_use]
    pub fn rate_percent(&self) -> u8 {
        percent(self.present + self.late, self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
    }

    #[test]
    fn overview_counts_marks_and_unmarked() {
        let mut sheet = AttendanceSheet::new([1, 2, 3, 4]);
        sheet.mark(1, AttendanceStatus::Present);
        sheet.mark(2, AttendanceStatus::Late);
        sheet.mark(3, AttendanceStatus::Absent);

        let overview = sheet.overview();
        assert_eq!(overview.present, 1);
        assert_eq!(overview.late, 1);
        assert_eq!(overview.absent, 1);
        assert_eq!(overview.unmarked, 1);
        assert_eq!(overview.marked(), 3);
        assert_eq!(overview.rate_percent(), 67);
    }

    #[test]
    fn empty_sheet_has_zero_rate() {
        let sheet = AttendanceSheet::new([]);
        assert!(sheet.is_empty());
        assert_eq!(sheet.overview().rate_percent(), 0);
    }

    #[test]
    fn marking_unknown_player_is_ignored() {
        let mut sheet = AttendanceSheet::new([1]);
        assert!(!sheet.mark(9, AttendanceStatus::Present));
        assert_eq!(sheet.status(9), None);
    }

    #[test]
    fn remarking_replaces_previous_status() {
        let mut sheet = AttendanceSheet::new([1]);
        sheet.mark(1, AttendanceStatus::Absent);
        sheet.mark(1, AttendanceStatus::Excused);
        assert_eq!(sheet.status(1), Some(AttendanceStatus::Excused));
        assert_eq!(sheet.overview().absent, 0);
    }

    #[test]
    fn entries_fill_unmarked_players_as_absent() {
        let mut sheet = AttendanceSheet::new([3, 1, 2]);
        sheet.mark(1, AttendanceStatus::Present);
        let entries = sheet.entries();
        let ids: Vec<_> = entries.iter().map(|e| e.player_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(entries[0].status, AttendanceStatus::Absent);
        assert_eq!(entries[1].status, AttendanceStatus::Present);
    }

    #[test]
    fn reset_clears_marks() {
        let mut sheet = AttendanceSheet::new([1, 2]);
        sheet.mark(1, AttendanceStatus::Present);
        sheet.reset();
        assert_eq!(sheet.overview().unmarked, 2);
    }

    #[test]
    fn submission_totals_become_a_record() {
        let mut sheet = AttendanceSheet::new([1, 2, 3, 4]);
        sheet.mark(1, AttendanceStatus::Present);
        sheet.mark(2, AttendanceStatus::Present);
        sheet.mark(3, AttendanceStatus::Excused);
        let submission = AttendanceSubmission {
            team_id: "senior".to_string(),
            session: "Evening Training".to_string(),
            date: date(),
            entries: sheet.entries(),
        };

        let record = submission.record(7);
        assert_eq!(record.present, 2);
        assert_eq!(record.excused, 1);
        assert_eq!(record.absent, 1);
        assert_eq!(record.total(), 4);
        assert_eq!(record.rate_percent(), 50);
    }
}
