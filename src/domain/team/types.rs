// SPDX-License-Identifier: MPL-2.0
//! Team records: players, drills and training sessions.
//!
//! Every record implements [`FilterableItem`] so pages can hand their lists
//! straight to the filter engine.

use crate::domain::filter::{FilterableItem, ItemMetadata};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Teams
// =============================================================================

/// A squad the coach manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =============================================================================
// Players
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

labeled_enum!(Position {
    Goalkeeper => "Goalkeeper",
    Defender => "Defender",
    Midfielder => "Midfielder",
    Forward => "Forward",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Available,
    Injured,
    Suspended,
}

labeled_enum!(PlayerStatus {
    Available => "Available",
    Injured => "Injured",
    Suspended => "Suspended",
});

/// A squad member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub number: u8,
    pub position: Position,
    pub status: PlayerStatus,
    pub age: u8,
    /// Season attendance, 0–100.
    #[serde(default)]
    pub attendance_percent: u8,
}

impl FilterableItem for Player {
    fn metadata(&self) -> ItemMetadata {
        ItemMetadata::new()
            .text("position", self.position.label())
            .text("status", self.status.token())
            .text("name", self.name.clone())
            .number("age", u32::from(self.age))
            .searchable(self.name.clone())
            .searchable(self.position.label())
    }
}

// =============================================================================
// Drills
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Basketball,
    Volleyball,
}

labeled_enum!(Sport {
    Football => "Football",
    Basketball => "Basketball",
    Volleyball => "Volleyball",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillKind {
    Technical,
    Tactical,
    Physical,
}

labeled_enum!(DrillKind {
    Technical => "Technical",
    Tactical => "Tactical",
    Physical => "Physical",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

labeled_enum!(Difficulty {
    Beginner => "Beginner",
    Intermediate => "Intermediate",
    Advanced => "Advanced",
});

/// An entry of the drill library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drill {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub minutes: u32,
    pub sport: Sport,
    pub kind: DrillKind,
    pub difficulty: Difficulty,
    /// Group size, e.g. "8-12 Players".
    pub players: String,
    /// Required space, e.g. "Half Pitch".
    pub space: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub equipment: String,
    pub author: String,
    #[serde(default)]
    pub favorite: bool,
}

impl Drill {
    /// Tag labels shown on the card, in display order.
    #[must_use]
    pub fn tags(&self) -> [&'static str; 3] {
        [self.sport.label(), self.kind.label(), self.difficulty.label()]
    }
}

impl FilterableItem for Drill {
    fn metadata(&self) -> ItemMetadata {
        ItemMetadata::new()
            .number("duration", self.minutes)
            .flag("favorite", self.favorite)
            .text("author", self.author.clone())
            .tags(self.tags())
            .searchable(self.title.clone())
            .searchable(self.description.clone())
            .searchable(self.tags().join(" "))
    }
}

// =============================================================================
// Training sessions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Cancelled,
}

labeled_enum!(SessionStatus {
    Scheduled => "Scheduled",
    Completed => "Completed",
    Cancelled => "Cancelled",
});

/// A scheduled training session or match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: u32,
    pub title: String,
    pub sport: Sport,
    pub status: SessionStatus,
    pub starts_at: NaiveDateTime,
    pub minutes: u32,
    pub location: String,
}

impl FilterableItem for TrainingSession {
    fn metadata(&self) -> ItemMetadata {
        ItemMetadata::new()
            .text("sport", self.sport.token())
            .text("status", self.status.token())
            .number("duration", self.minutes)
            .searchable(self.title.clone())
            .searchable(self.location.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{FilterCriterion, ListFilterEngine};

    fn drill(id: u32, minutes: u32, sport: Sport) -> Drill {
        Drill {
            id,
            title: format!("Drill {id}"),
            description: "Rondo under pressure".to_string(),
            minutes,
            sport,
            kind: DrillKind::Technical,
            difficulty: Difficulty::Intermediate,
            players: "8-12 Players".to_string(),
            space: "Half Pitch".to_string(),
            instructions: String::new(),
            equipment: "Cones".to_string(),
            author: "Ahmed Hassan".to_string(),
            favorite: false,
        }
    }

    #[test]
    fn drill_metadata_exposes_tags_and_duration() {
        let meta = drill(1, 20, Sport::Football).metadata();
        assert_eq!(meta.has_tag("football"), Some(true));
        assert_eq!(meta.has_tag("technical"), Some(true));
        assert_eq!(meta.number_field("duration"), Some(20));
    }

    #[test]
    fn drill_duration_filter_respects_bucket_edges() {
        let drills = vec![
            drill(1, 15, Sport::Football),
            drill(2, 30, Sport::Football),
            drill(3, 31, Sport::Football),
        ];
        let mut engine = ListFilterEngine::new();

        engine.apply_filters(&drills, vec![FilterCriterion::duration("duration", "short")]);
        assert_eq!(engine.visible_indices().collect::<Vec<_>>(), vec![0]);

        engine.apply_filters(&drills, vec![FilterCriterion::duration("duration", "medium")]);
        assert_eq!(engine.visible_indices().collect::<Vec<_>>(), vec![1]);

        engine.apply_filters(&drills, vec![FilterCriterion::duration("duration", "long")]);
        assert_eq!(engine.visible_indices().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn player_status_token_is_lowercase() {
        assert_eq!(PlayerStatus::Injured.token(), "injured");
        assert_eq!(Position::ALL.len(), 4);
    }

    #[test]
    fn player_deserializes_from_lowercase_json_like_toml() {
        let player: Player = toml::from_str(
            r#"
            id = 7
            name = "Mohamed Salah"
            number = 11
            position = "forward"
            status = "available"
            age = 31
            "#,
        )
        .expect("parse player");
        assert_eq!(player.position, Position::Forward);
        assert_eq!(player.attendance_percent, 0);
    }
}
