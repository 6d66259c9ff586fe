// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every style is a function of the theme and the button status, so the
//! same call site renders correctly in light and dark mode.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn outlined(background: Color, text_color: Color, border: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

fn inactive(theme: &Theme) -> button::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };
    outlined(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
}

/// Filled brand button for the main action of a page or dialog.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => outlined(
            palette::PRIMARY_400,
            palette::WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        button::Status::Disabled => inactive(theme),
        button::Status::Active | button::Status::Pressed => outlined(
            palette::PRIMARY_500,
            palette::WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
    }
}

/// Grayed-out look for controls that currently do nothing.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    |theme: &Theme, _status: button::Status| inactive(theme)
}

/// Active entry of a toggle group; same palette as [`primary`].
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Idle entry of a toggle group, or a secondary action.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let light = matches!(theme, Theme::Light);
    let (background, text_color) = if light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, palette::WHITE)
    };

    match status {
        button::Status::Hovered => {
            let hover = if light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            outlined(hover, text_color, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => inactive(theme),
        button::Status::Active | button::Status::Pressed => {
            outlined(background, text_color, palette::GRAY_400, shadow::NONE)
        }
    }
}

/// Pill-shaped category chip.
pub fn chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = if active {
            selected(theme, status)
        } else {
            unselected(theme, status)
        };
        button::Style {
            border: Border {
                radius: radius::FULL.into(),
                ..base.border
            },
            ..base
        }
    }
}

/// Borderless text button (card actions, sidebar entries).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let wash = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        button::Status::Active | button::Status::Disabled => opacity::TRANSPARENT,
    };
    let text_color = match status {
        button::Status::Disabled => palette::GRAY_400,
        _ => theme.palette().text,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: wash,
            ..palette::GRAY_400
        })),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_fill() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn disabled_primary_matches_disabled_style() {
        let theme = Theme::Light;
        let from_status = primary(&theme, button::Status::Disabled);
        let explicit = disabled()(&theme, button::Status::Active);
        assert_eq!(from_status.background, explicit.background);
    }

    #[test]
    fn ghost_gains_a_wash_on_hover() {
        let idle = ghost(&Theme::Dark, button::Status::Active);
        let hover = ghost(&Theme::Dark, button::Status::Hovered);
        assert_ne!(idle.background, hover.background);
    }

    #[test]
    fn chips_are_pill_shaped() {
        let style = chip(false)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.radius, radius::FULL.into());
    }
}
