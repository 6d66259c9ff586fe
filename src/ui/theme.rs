// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for statuses and difficulty levels.

use crate::domain::team::{
    AttendanceStatus, CheckupStatus, Difficulty, MedicalStatus, PlayerStatus, SessionStatus,
};
use crate::ui::design_tokens::palette;
use iced::Color;

/// Standard color for error text (inline form errors).
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Badge color for a player's availability.
pub fn player_status_color(status: PlayerStatus) -> Color {
    match status {
        PlayerStatus::Available => palette::SUCCESS_500,
        PlayerStatus::Injured => palette::ERROR_500,
        PlayerStatus::Suspended => palette::WARNING_500,
    }
}

/// Badge color for a training session.
pub fn session_status_color(status: SessionStatus) -> Color {
    match status {
        SessionStatus::Scheduled => palette::INFO_500,
        SessionStatus::Completed => palette::SUCCESS_500,
        SessionStatus::Cancelled => palette::GRAY_400,
    }
}

/// Tag color for a drill difficulty.
pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => palette::SUCCESS_500,
        Difficulty::Intermediate => palette::WARNING_500,
        Difficulty::Advanced => palette::ERROR_500,
    }
}

/// Accent of an attendance mark.
pub fn attendance_status_color(status: AttendanceStatus) -> Color {
    match status {
        AttendanceStatus::Present => palette::SUCCESS_500,
        AttendanceStatus::Late => palette::WARNING_500,
        AttendanceStatus::Absent => palette::ERROR_500,
        AttendanceStatus::Excused => palette::INFO_500,
    }
}

pub fn medical_status_color(status: MedicalStatus) -> Color {
    match status {
        MedicalStatus::Fit => palette::SUCCESS_500,
        MedicalStatus::Injured => palette::ERROR_500,
        MedicalStatus::Recovering => palette::WARNING_500,
    }
}

pub fn checkup_status_color(status: CheckupStatus) -> Color {
    match status {
        CheckupStatus::Scheduled => palette::INFO_500,
        CheckupStatus::Completed => palette::SUCCESS_500,
        CheckupStatus::Cancelled => palette::GRAY_400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injured_players_are_flagged_red() {
        assert_eq!(player_status_color(PlayerStatus::Injured), palette::ERROR_500);
        assert_eq!(medical_status_color(MedicalStatus::Injured), palette::ERROR_500);
    }
}
