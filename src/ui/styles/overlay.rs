// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for modal backdrops.

use crate::ui::design_tokens::{opacity, palette::BLACK};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Dimmed layer behind a modal. `alpha` scales the dimming while closing.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha,
            ..BLACK
        })),
        ..Default::default()
    }
}
